use async_trait::async_trait;
use gw2_application::{
    ApiResult, ClientSession, Endpoint, ListAll, RawList, Single, SingleFetch,
};
use gw2_domain::models::{Account, AccountAchievement, InventorySlot, WalletEntry};
use gw2_domain::{EndpointDescriptor, EndpointShape};

use crate::Gw2Client;

const ACCOUNT: EndpointDescriptor = EndpointDescriptor::new("account");
const ACHIEVEMENTS: EndpointDescriptor = EndpointDescriptor::new("account/achievements");
const BANK: EndpointDescriptor = EndpointDescriptor::new("account/bank");
const DUNGEONS: EndpointDescriptor =
    EndpointDescriptor::new("account/dungeons").with_cache_hint(None);
const WALLET: EndpointDescriptor = EndpointDescriptor::new("account/wallet");

/// `/v2/account` and the per-account endpoints below it.
///
/// Children are opened with a copy of this instance's current key.
#[derive(Debug)]
pub struct AccountEndpoint {
    inner: Single<Account>,
}

impl AccountEndpoint {
    /// `/v2/account/achievements`: progress on every started achievement.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn achievements(&self) -> ApiResult<ListAll<AccountAchievement>> {
        self.session().derive(ACHIEVEMENTS).build()
    }

    /// `/v2/account/bank`: vault slots, `None` for empty ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn bank(&self) -> ApiResult<ListAll<Option<InventorySlot>>> {
        self.session().derive(BANK).build()
    }

    /// `/v2/account/dungeons`: dungeon paths completed since the daily reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn dungeons(&self) -> ApiResult<RawList> {
        self.session().derive(DUNGEONS).build()
    }

    /// `/v2/account/wallet`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn wallet(&self) -> ApiResult<ListAll<WalletEntry>> {
        self.session().derive(WALLET).build()
    }
}

impl Endpoint for AccountEndpoint {
    fn session(&self) -> &ClientSession {
        self.inner.session()
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        self.inner.session_mut()
    }

    fn shape(&self) -> EndpointShape {
        self.inner.shape()
    }
}

#[async_trait]
impl SingleFetch for AccountEndpoint {
    type Output = Account;

    async fn get(&self) -> ApiResult<Account> {
        self.inner.get().await
    }
}

impl Gw2Client {
    /// `/v2/account`. Requires a key with the `account` permission.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn account(&self) -> ApiResult<AccountEndpoint> {
        Ok(AccountEndpoint {
            inner: self.endpoint(ACCOUNT).build()?,
        })
    }
}
