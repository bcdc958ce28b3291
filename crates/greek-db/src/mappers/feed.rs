//! Post, like, and comment entity <-> model mappers

use greek_core::entities::{Post, PostComment, PostLike};

use crate::models::{PostCommentModel, PostLikeModel, PostModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            author_id: model.author_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<PostLikeModel> for PostLike {
    fn from(model: PostLikeModel) -> Self {
        PostLike {
            post_id: model.post_id,
            profile_id: model.profile_id,
            created_at: model.created_at,
        }
    }
}

impl From<PostCommentModel> for PostComment {
    fn from(model: PostCommentModel) -> Self {
        PostComment {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
