//! Entry point for talking to Pagar.me.

use crate::error::{PagarMeError, PagarMeResult};
use crate::executor::{Method, QueryExecutor};
use crate::query::Query;
use crate::resource::{Resource, Subscription, Transaction};
use pagarme_model::{decode_models, Service, ServiceConfig};
use std::fmt;
use std::sync::Arc;

/// Pagar.me API client.
///
/// Every resource it returns is bound to the client's [`Service`].
#[derive(Clone)]
pub struct PagarMe {
    service: Service,
    executor: Arc<dyn QueryExecutor>,
}

impl fmt::Debug for PagarMe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagarMe")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl PagarMe {
    pub fn new(config: ServiceConfig, executor: Arc<dyn QueryExecutor>) -> Self {
        Self::with_service(Service::new(config), executor)
    }

    pub fn with_service(service: Service, executor: Arc<dyn QueryExecutor>) -> Self {
        Self { service, executor }
    }

    /// Client bound to the process-wide default service.
    pub fn with_default_service(executor: Arc<dyn QueryExecutor>) -> Self {
        Self::with_service(Service::default_service(), executor)
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    fn run(&self, query: &Query) -> PagarMeResult<String> {
        query.execute(&self.service, self.executor.as_ref())
    }

    fn one<R: Resource>(&self, body: &str) -> PagarMeResult<R> {
        let mut models = decode_models(body, &self.service)?;
        if models.len() != 1 {
            return Err(PagarMeError::UnexpectedResponse(format!(
                "expected one {}, got {}",
                R::KIND.discriminator(),
                models.len()
            )));
        }
        R::from_any(models.remove(0))
    }

    /// Fetches a resource by id.
    pub fn find<R: Resource>(&self, id: impl fmt::Display) -> PagarMeResult<R> {
        let body = self.run(&Query::new(Method::Get, format!("{}/{id}", R::ENDPOINT)))?;
        self.one(&body)
    }

    /// Fetches one page of a collection. Pages start at 1.
    pub fn list<R: Resource>(&self, page: u32, count: u32) -> PagarMeResult<Vec<R>> {
        let query = Query::new(Method::Get, R::ENDPOINT).page(page).count(count);
        let body = self.run(&query)?;
        decode_models(&body, &self.service)?
            .into_iter()
            .map(R::from_any)
            .collect()
    }

    /// Creates the resource when it has no id, updates it otherwise.
    ///
    /// Only fields changed since the last load are sent. The resource is
    /// reloaded from the response, which clears those changes.
    pub fn save<R: Resource>(&self, resource: &mut R) -> PagarMeResult<()> {
        let query = match resource.id() {
            Some(id) => Query::new(Method::Put, format!("{}/{id}", R::ENDPOINT)),
            None => Query::new(Method::Post, R::ENDPOINT),
        };
        let query = query.with_fields(&resource.model().fields(false));

        let body = self.run(&query)?;
        resource.model_mut().load_json(&body)?;
        Ok(())
    }

    /// Reloads a persisted resource, discarding local changes.
    pub fn refresh<R: Resource>(&self, resource: &mut R) -> PagarMeResult<()> {
        let path = Self::member_path(resource, "")?;
        let body = self.run(&Query::new(Method::Get, path))?;
        resource.model_mut().load_json(&body)?;
        Ok(())
    }

    /// Refunds a paid transaction.
    pub fn refund(&self, transaction: &mut Transaction) -> PagarMeResult<()> {
        self.action(transaction, "refund", |query| query)
    }

    /// Captures an authorized transaction, optionally for a partial amount.
    pub fn capture(&self, transaction: &mut Transaction, amount: Option<i64>) -> PagarMeResult<()> {
        self.action(transaction, "capture", |query| match amount {
            Some(cents) => query.with_parameter("amount", cents),
            None => query,
        })
    }

    /// Cancels a subscription.
    pub fn cancel(&self, subscription: &mut Subscription) -> PagarMeResult<()> {
        self.action(subscription, "cancel", |query| query)
    }

    fn action<R: Resource>(
        &self,
        resource: &mut R,
        action: &str,
        build: impl FnOnce(Query) -> Query,
    ) -> PagarMeResult<()> {
        let path = Self::member_path(resource, action)?;
        let body = self.run(&build(Query::new(Method::Post, path)))?;
        resource.model_mut().load_json(&body)?;
        Ok(())
    }

    fn member_path<R: Resource>(resource: &R, action: &str) -> PagarMeResult<String> {
        let id = resource
            .id()
            .ok_or(PagarMeError::MissingId(R::KIND.discriminator()))?;
        Ok(if action.is_empty() {
            format!("{}/{id}", R::ENDPOINT)
        } else {
            format!("{}/{id}/{action}", R::ENDPOINT)
        })
    }
}
