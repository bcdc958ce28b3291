//! Connection service
//!
//! Manages the undirected connection graph: directional requests, the
//! accept/reject state machine, and connectivity queries.
//!
//! An existing edge always wins over any stale pending request, both in
//! status queries and in the `send_request` precondition checks. That way
//! an accept that inserted its edge but failed to mark the request never
//! splits the graph state.

use tracing::{info, instrument};
use uuid::Uuid;

use greek_core::entities::{Connection, ConnectionRequest, Notification, NotificationKind};
use greek_core::error::DomainError;
use greek_core::events::{ConnectionAcceptedEvent, ConnectionRequestCreatedEvent, DomainEvent};
use greek_core::value_objects::{ConnectionStatus, MemberPair, RequestStatus};

use crate::dto::{
    ConnectionRequestResponse, ConnectionResponse, ConnectionStatusResponse, ProfileResponse,
    RequestDecision, SentRequestResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Connection service
pub struct ConnectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConnectionService<'a> {
    /// Create a new ConnectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a connection request to another member
    ///
    /// Preconditions are checked before any write: no self-requests, the
    /// target must exist, the pair must not already be connected, and no
    /// pending request from the actor to the target may exist. A racing
    /// duplicate insert is caught by the store's uniqueness constraint and
    /// surfaces as `AlreadyRequested` as well.
    #[instrument(skip(self))]
    pub async fn send_request(&self, actor: Uuid, to: Uuid) -> ServiceResult<SentRequestResponse> {
        if actor == to {
            return Err(DomainError::InvalidTarget.into());
        }

        let target = self
            .ctx
            .profile_repo()
            .find_by_id(to)
            .await?
            .ok_or(DomainError::ProfileNotFound(to))?;

        let pair = MemberPair::new(actor, to)?;
        if self.ctx.connection_repo().find_by_pair(&pair).await?.is_some() {
            return Err(DomainError::AlreadyConnected.into());
        }

        if self
            .ctx
            .request_repo()
            .find_pending(actor, to)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyRequested.into());
        }

        let request = ConnectionRequest::new(self.ctx.generate_id(), actor, to);
        self.ctx.request_repo().create(&request).await?;

        info!(request_id = %request.id, from = %actor, to = %to, "Connection request sent");

        let event = DomainEvent::ConnectionRequestCreated(ConnectionRequestCreatedEvent {
            request_id: request.id,
            from_profile: actor,
            to_profile: to,
            created_at: request.created_at,
        });
        self.ctx.publisher().publish_to_user(to, &event).await.ok();

        if target.notifications.connection {
            let actor_name = self.profile_name(actor).await;
            self.notify(
                to,
                NotificationKind::ConnectionRequest,
                "New connection request".to_string(),
                format!("{actor_name} wants to connect with you"),
                serde_json::json!({ "request_id": request.id, "from_profile": actor }),
            )
            .await;
        }

        Ok(SentRequestResponse {
            id: request.id,
            to_profile: to,
            status: request.status.as_str().to_string(),
            created_at: request.created_at,
        })
    }

    /// Respond to a pending connection request
    ///
    /// Only the recipient may respond. Accepting creates the edge first
    /// and marks the request afterwards; rejecting only marks the request.
    /// Either way the request becomes terminal.
    #[instrument(skip(self))]
    pub async fn respond(
        &self,
        actor: Uuid,
        request_id: Uuid,
        decision: RequestDecision,
    ) -> ServiceResult<()> {
        let mut request = self
            .ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or(DomainError::RequestNotFound(request_id))?;

        if request.to_profile != actor {
            return Err(DomainError::NotRequestRecipient.into());
        }

        match decision {
            RequestDecision::Accept => {
                request.accept()?;

                // Edge before status: an edge with a stale pending request
                // reads as connected, the reverse would lose the accept.
                let pair = MemberPair::new(request.from_profile, request.to_profile)?;
                let connection = Connection::new(self.ctx.generate_id(), pair);
                self.ctx.connection_repo().create(&connection).await?;

                self.ctx
                    .request_repo()
                    .update_status(request.id, RequestStatus::Accepted)
                    .await?;

                info!(
                    request_id = %request.id,
                    connection_id = %connection.id,
                    "Connection request accepted"
                );

                let event = DomainEvent::ConnectionAccepted(ConnectionAcceptedEvent {
                    request_id: request.id,
                    from_profile: request.from_profile,
                    to_profile: request.to_profile,
                    accepted_at: request.updated_at,
                });
                self.ctx
                    .publisher()
                    .publish_to_user(request.from_profile, &event)
                    .await
                    .ok();
                self.ctx
                    .publisher()
                    .publish_to_user(request.to_profile, &event)
                    .await
                    .ok();

                let wants_notification = self
                    .ctx
                    .profile_repo()
                    .find_by_id(request.from_profile)
                    .await?
                    .is_some_and(|p| p.notifications.connection);

                if wants_notification {
                    let actor_name = self.profile_name(actor).await;
                    self.notify(
                        request.from_profile,
                        NotificationKind::ConnectionAccepted,
                        "Connection accepted".to_string(),
                        format!("{actor_name} accepted your connection request"),
                        serde_json::json!({ "profile_id": actor }),
                    )
                    .await;
                }
            }
            RequestDecision::Reject => {
                request.reject()?;

                self.ctx
                    .request_repo()
                    .update_status(request.id, RequestStatus::Rejected)
                    .await?;

                info!(request_id = %request.id, "Connection request rejected");
            }
        }

        Ok(())
    }

    /// List the actor's connections, newest first
    #[instrument(skip(self))]
    pub async fn list_connections(&self, actor: Uuid) -> ServiceResult<Vec<ConnectionResponse>> {
        let connections = self.ctx.connection_repo().find_by_member(actor).await?;

        let mut responses = Vec::with_capacity(connections.len());
        for connection in connections {
            let Some(other) = connection.other(actor) else {
                continue;
            };
            // A deleted member leaves a dangling edge; skip it.
            if let Some(profile) = self.ctx.profile_repo().find_by_id(other).await? {
                responses.push(ConnectionResponse {
                    id: connection.id,
                    profile: ProfileResponse::public_view(&profile),
                    connected_at: connection.created_at,
                });
            }
        }

        Ok(responses)
    }

    /// List pending requests addressed to the actor
    #[instrument(skip(self))]
    pub async fn list_pending_incoming(
        &self,
        actor: Uuid,
    ) -> ServiceResult<Vec<ConnectionRequestResponse>> {
        let requests = self.ctx.request_repo().find_pending_incoming(actor).await?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            if let Some(profile) = self
                .ctx
                .profile_repo()
                .find_by_id(request.from_profile)
                .await?
            {
                responses.push(ConnectionRequestResponse {
                    id: request.id,
                    from: ProfileResponse::public_view(&profile),
                    created_at: request.created_at,
                });
            }
        }

        Ok(responses)
    }

    /// Relationship between the actor and another profile
    ///
    /// Evaluated in priority order: connected, pending sent, pending
    /// received, none.
    #[instrument(skip(self))]
    pub async fn connection_status(
        &self,
        actor: Uuid,
        other: Uuid,
    ) -> ServiceResult<ConnectionStatusResponse> {
        if actor == other {
            return Ok(ConnectionStatusResponse {
                status: ConnectionStatus::None,
            });
        }

        let pair = MemberPair::new(actor, other)?;
        if self.ctx.connection_repo().find_by_pair(&pair).await?.is_some() {
            return Ok(ConnectionStatusResponse {
                status: ConnectionStatus::Connected,
            });
        }

        if self
            .ctx
            .request_repo()
            .find_pending(actor, other)
            .await?
            .is_some()
        {
            return Ok(ConnectionStatusResponse {
                status: ConnectionStatus::PendingSent,
            });
        }

        if self
            .ctx
            .request_repo()
            .find_pending(other, actor)
            .await?
            .is_some()
        {
            return Ok(ConnectionStatusResponse {
                status: ConnectionStatus::PendingReceived,
            });
        }

        Ok(ConnectionStatusResponse {
            status: ConnectionStatus::None,
        })
    }

    async fn profile_name(&self, id: Uuid) -> String {
        self.ctx
            .profile_repo()
            .find_by_id(id)
            .await
            .ok()
            .flatten()
            .map_or_else(|| "A member".to_string(), |p| p.name)
    }

    /// Create an in-app notification and announce it, best-effort
    async fn notify(
        &self,
        profile_id: Uuid,
        kind: NotificationKind,
        title: String,
        body: String,
        data: serde_json::Value,
    ) {
        let notification =
            Notification::new(self.ctx.generate_id(), profile_id, kind, title, body)
                .with_data(data);

        if self
            .ctx
            .notification_repo()
            .create(&notification)
            .await
            .is_ok()
        {
            let event = DomainEvent::NotificationCreated(
                greek_core::events::NotificationCreatedEvent {
                    notification_id: notification.id,
                    profile_id,
                    kind: notification.kind.as_str().to_string(),
                },
            );
            self.ctx
                .publisher()
                .publish_to_user(profile_id, &event)
                .await
                .ok();
        }
    }
}
