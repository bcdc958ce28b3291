//! Feed service
//!
//! Posts, like toggles, and comments. The feed is assembled read-side
//! from the flat post, like, and comment tables.

use tracing::{info, instrument};
use uuid::Uuid;

use greek_core::entities::{Post, PostComment, PostLike};
use greek_core::error::DomainError;

use crate::dto::{
    CommentResponse, FeedPostResponse, LikeStateResponse, PostLikeResponse, ProfileResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a feed post
    #[instrument(skip(self, content))]
    pub async fn create_post(&self, actor: Uuid, content: &str) -> ServiceResult<FeedPostResponse> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(actor)
            .await?
            .ok_or(DomainError::ProfileNotFound(actor))?;

        let post = Post::new(self.ctx.generate_id(), actor, content.to_string());
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author = %actor, "Post created");

        Ok(FeedPostResponse {
            id: post.id,
            author: ProfileResponse::public_view(&author),
            content: post.content,
            created_at: post.created_at,
            likes: Vec::new(),
            like_count: 0,
            liked_by_me: false,
            comments: Vec::new(),
        })
    }

    /// Toggle the actor's like on a post
    ///
    /// If a like exists it is removed, otherwise one is inserted. The
    /// store's primary key on (post, profile) guarantees a concurrent
    /// double-toggle cannot leave two likes.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, actor: Uuid, post_id: Uuid) -> ServiceResult<LikeStateResponse> {
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let liked = if self.ctx.like_repo().find(post_id, actor).await?.is_some() {
            self.ctx.like_repo().delete(post_id, actor).await?;
            false
        } else {
            let like = PostLike::new(post_id, actor);
            self.ctx.like_repo().create(&like).await?;
            true
        };

        info!(post_id = %post_id, profile_id = %actor, liked, "Like toggled");

        let like_count = self.ctx.like_repo().find_by_post(post_id).await?.len() as i64;

        Ok(LikeStateResponse { liked, like_count })
    }

    /// Add a comment to a post
    #[instrument(skip(self, content))]
    pub async fn add_comment(
        &self,
        actor: Uuid,
        post_id: Uuid,
        content: &str,
    ) -> ServiceResult<CommentResponse> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(actor)
            .await?
            .ok_or(DomainError::ProfileNotFound(actor))?;

        let comment = PostComment::new(
            self.ctx.generate_id(),
            post_id,
            actor,
            content.to_string(),
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment added");

        Ok(CommentResponse {
            id: comment.id,
            post_id,
            author: ProfileResponse::public_view(&author),
            content: comment.content,
            created_at: comment.created_at,
        })
    }

    /// List the full feed, newest posts first
    ///
    /// Each post carries its author, the full like list (with the derived
    /// count and whether the actor liked it), and its comments oldest
    /// first.
    #[instrument(skip(self))]
    pub async fn list_feed(&self, actor: Uuid) -> ServiceResult<Vec<FeedPostResponse>> {
        let posts = self.ctx.post_repo().find_all().await?;

        let mut feed = Vec::with_capacity(posts.len());
        for post in posts {
            let Some(author) = self.ctx.profile_repo().find_by_id(post.author_id).await? else {
                continue;
            };

            let likes = self.ctx.like_repo().find_by_post(post.id).await?;
            let liked_by_me = likes.iter().any(|l| l.profile_id == actor);

            let comments = self.ctx.comment_repo().find_by_post(post.id).await?;
            let mut comment_responses = Vec::with_capacity(comments.len());
            for comment in comments {
                if let Some(commenter) = self
                    .ctx
                    .profile_repo()
                    .find_by_id(comment.author_id)
                    .await?
                {
                    comment_responses.push(CommentResponse {
                        id: comment.id,
                        post_id: comment.post_id,
                        author: ProfileResponse::public_view(&commenter),
                        content: comment.content,
                        created_at: comment.created_at,
                    });
                }
            }

            feed.push(FeedPostResponse {
                id: post.id,
                author: ProfileResponse::public_view(&author),
                content: post.content,
                created_at: post.created_at,
                like_count: likes.len() as i64,
                liked_by_me,
                likes: likes.iter().map(PostLikeResponse::from).collect(),
                comments: comment_responses,
            });
        }

        Ok(feed)
    }
}
