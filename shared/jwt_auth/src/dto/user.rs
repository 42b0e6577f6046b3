use std::{ops::Deref, sync::Arc};

///
/// Authenticated caller.
///
/// Fields are stored behind an Arc so cloning
/// the request extension stays cheap.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

pub struct InnerUser {
    pub subject: String,
}

impl User {
    pub fn new(subject: String) -> Self {
        Self {
            inner: Arc::new(InnerUser { subject }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
