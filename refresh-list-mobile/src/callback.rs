//! Async callbacks for refresh props

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use refresh_list_common::{RefreshError, RefreshHandler};

pub type RefreshFuture = LocalBoxFuture<'static, Result<(), RefreshError>>;

/// Callback returning a future, comparable by identity like `yew::Callback`
#[derive(Clone)]
pub struct AsyncCallback(Rc<dyn Fn() -> RefreshFuture>);

impl AsyncCallback {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), RefreshError>> + 'static,
    {
        Self(Rc::new(move || f().boxed_local()))
    }

    pub fn call(&self) -> RefreshFuture {
        (self.0)()
    }
}

impl PartialEq for AsyncCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AsyncCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AsyncCallback")
    }
}

/// Refresh handler backed by the container's optional callback props
#[derive(Clone, Default)]
pub struct PropHandler {
    pub header: Option<AsyncCallback>,
    pub footer: Option<AsyncCallback>,
}

#[async_trait(?Send)]
impl RefreshHandler for PropHandler {
    async fn on_header_refresh(&self) -> Result<(), RefreshError> {
        match &self.header {
            Some(callback) => callback.call().await,
            None => Ok(()),
        }
    }

    async fn on_footer_refresh(&self) -> Result<(), RefreshError> {
        match &self.footer {
            Some(callback) => callback.call().await,
            None => Ok(()),
        }
    }
}
