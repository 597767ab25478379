use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ID, Object, Request, Response, Schema, Variables,
};

use crate::error::Result;
use crate::resolvers::Resolvers;
use crate::storage::UserStore;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<UserStore>) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(Resolvers::new(store))
        .finish()
}

/// Execute a single request, parsing `variables` as a JSON object when given.
pub async fn execute(
    schema: &RosterSchema,
    query: &str,
    variables: Option<&str>,
) -> Result<Response> {
    let vars: Variables = match variables {
        Some(v) => serde_json::from_str(v)?,
        None => Variables::default(),
    };
    Ok(schema.execute(Request::new(query).variables(vars)).await)
}

fn resolvers<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Resolvers> {
    ctx.data::<Resolvers>()
}

/// All the queries we can do
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        Ok(resolvers(ctx)?.users().into_iter().map(Into::into).collect())
    }

    /// A test function, returns 'cool beans!'
    async fn test(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        Ok(resolvers(ctx)?.test().to_string())
    }

    /// Returns `word` reversed
    async fn repeat(&self, ctx: &Context<'_>, word: String) -> async_graphql::Result<String> {
        Ok(resolvers(ctx)?.repeat(&word))
    }
}

/// All the mutations we can do
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a user; the id is assigned by the server
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        user: Option<NewUserInput>,
    ) -> async_graphql::Result<MutationResponse> {
        let input = user.unwrap_or_default().into();
        Ok(resolvers(ctx)?.add_user(input)?.into())
    }

    /// Delete a user by id
    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<MutationResponse> {
        Ok(resolvers(ctx)?.delete_user(&id).into())
    }

    /// Return the user with a new email
    async fn update_user_email(
        &self,
        ctx: &Context<'_>,
        id: ID,
        email: String,
    ) -> async_graphql::Result<MutationResponse> {
        Ok(resolvers(ctx)?.update_user_email(&id, email).into())
    }

    /// Return the user with a new name
    async fn update_user_name(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
    ) -> async_graphql::Result<MutationResponse> {
        Ok(resolvers(ctx)?.update_user_name(&id, name).into())
    }
}
