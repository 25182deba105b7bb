use std::{ops::Deref, sync::LazyLock};

use folio_utils::folio_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = folio_version();

    format!("Folio ({repository}, Version {version})")
});

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new() -> reqwest::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .map(Self)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
