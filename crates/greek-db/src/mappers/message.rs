//! Message entity <-> model mapper

use greek_core::entities::Message;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            content: model.content,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
