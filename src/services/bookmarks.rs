use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{AccessDetailsProvider, AssetResolver};
use crate::model::{FetchOutcome, FetchRequest, FetchResult};

/// Background worker running the bookmarks fetch
///
/// At most one fetch is live: issuing a new one cancels the previous token.
/// Outcomes are reported on the channel returned by `new`, tagged with the
/// generation of the request that produced them.
pub struct BookmarksFetcher {
    resolver: Arc<dyn AssetResolver>,
    access: Arc<dyn AccessDetailsProvider>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    in_flight: Option<(u64, CancellationToken)>,
}

impl BookmarksFetcher {
    pub fn new(
        resolver: Arc<dyn AssetResolver>,
        access: Arc<dyn AccessDetailsProvider>,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let fetcher = Self {
            resolver,
            access,
            outcome_tx,
            in_flight: None,
        };

        (fetcher, outcome_rx)
    }

    /// Start a fetch, superseding any fetch still running
    pub fn issue(&mut self, request: FetchRequest) {
        self.cancel();

        let token = CancellationToken::new();
        self.in_flight = Some((request.generation, token.clone()));

        let resolver = Arc::clone(&self.resolver);
        let access = Arc::clone(&self.access);
        let outcome_tx = self.outcome_tx.clone();

        debug!(
            generation = request.generation,
            dids = request.dids.len(),
            chains = ?request.chain_ids,
            "issuing bookmarks fetch"
        );

        tokio::spawn(async move {
            let generation = request.generation;

            let result = tokio::select! {
                _ = token.cancelled() => {
                    debug!(generation, "bookmarks fetch cancelled");
                    return;
                }
                result = run_fetch(resolver.as_ref(), access.as_ref(), &request, token.clone()) => result,
            };

            // Superseded while the last await was completing
            if token.is_cancelled() {
                debug!(generation, "dropping result of cancelled bookmarks fetch");
                return;
            }

            let _ = outcome_tx.send(FetchOutcome { generation, result });
        });
    }

    /// Cancel the running fetch, if any
    pub fn cancel(&mut self) {
        if let Some((generation, token)) = self.in_flight.take() {
            if !token.is_cancelled() {
                debug!(generation, "cancelling bookmarks fetch");
                token.cancel();
            }
        }
    }

    /// Generation of the fetch started last, until it is cancelled
    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|(generation, _)| *generation)
    }
}

impl Drop for BookmarksFetcher {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Resolve, then compute access details, in sequence
async fn run_fetch(
    resolver: &dyn AssetResolver,
    access: &dyn AccessDetailsProvider,
    request: &FetchRequest,
    cancel: CancellationToken,
) -> FetchResult {
    let assets = match resolver
        .resolve(&request.dids, &request.chain_ids, cancel)
        .await
    {
        Ok(assets) => assets,
        Err(e) => return FetchResult::Failed(e.context("Failed to resolve bookmarked assets")),
    };

    if assets.is_empty() {
        return FetchResult::NoRecords;
    }

    match access.compute(assets, request.account_id.as_deref()).await {
        Ok(records) => FetchResult::Resolved(records),
        Err(e) => FetchResult::Failed(e.context("Failed to compute access details")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Asset, AssetExtended, Metadata};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Semaphore;

    struct FakeResolver {
        assets: Vec<Asset>,
        fail: bool,
        gate: Option<Arc<Semaphore>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AssetResolver for FakeResolver {
        async fn resolve(
            &self,
            dids: &[String],
            _chain_ids: &[u64],
            _cancel: CancellationToken,
        ) -> Result<Vec<Asset>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ref gate) = self.gate {
                let _permit = gate.acquire().await?;
            }
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self
                .assets
                .iter()
                .filter(|a| dids.contains(&a.id))
                .cloned()
                .collect())
        }
    }

    struct PassThrough {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AccessDetailsProvider for PassThrough {
        async fn compute(
            &self,
            assets: Vec<Asset>,
            _account_id: Option<&str>,
        ) -> Result<Vec<AssetExtended>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(assets
                .into_iter()
                .map(|asset| AssetExtended {
                    asset,
                    access_details: None,
                })
                .collect())
        }
    }

    fn asset(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            chain_id: 1,
            nft_address: String::new(),
            metadata: Metadata::default(),
            services: vec![],
            datatokens: vec![],
            nft: None,
        }
    }

    fn request(generation: u64, dids: &[&str]) -> FetchRequest {
        FetchRequest {
            generation,
            dids: dids.iter().map(|s| s.to_string()).collect(),
            chain_ids: vec![1],
            account_id: None,
        }
    }

    fn resolver(assets: Vec<Asset>, fail: bool, gate: Option<Arc<Semaphore>>) -> Arc<FakeResolver> {
        Arc::new(FakeResolver {
            assets,
            fail,
            gate,
            calls: AtomicUsize::new(0),
        })
    }

    fn pass_through() -> Arc<PassThrough> {
        Arc::new(PassThrough {
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_resolved_outcome() {
        let (mut fetcher, mut rx) =
            BookmarksFetcher::new(resolver(vec![asset("did:op:a")], false, None), pass_through());

        fetcher.issue(request(1, &["did:op:a"]));
        let outcome = rx.recv().await.unwrap();

        assert_eq!(outcome.generation, 1);
        match outcome.result {
            FetchResult::Resolved(records) => assert_eq!(records[0].did(), "did:op:a"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_resolution_skips_access_details() {
        let access = pass_through();
        let (mut fetcher, mut rx) = BookmarksFetcher::new(resolver(vec![], false, None), access.clone());

        fetcher.issue(request(1, &["did:op:a"]));
        let outcome = rx.recv().await.unwrap();

        assert!(matches!(outcome.result, FetchResult::NoRecords));
        assert_eq!(access.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_is_reported_with_context() {
        let (mut fetcher, mut rx) = BookmarksFetcher::new(resolver(vec![], true, None), pass_through());

        fetcher.issue(request(1, &["did:op:a"]));
        let outcome = rx.recv().await.unwrap();

        match outcome.result {
            FetchResult::Failed(e) => {
                let msg = format!("{:#}", e);
                assert!(msg.contains("Failed to resolve bookmarked assets"));
                assert!(msg.contains("connection refused"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_superseded_fetch_never_reports() {
        let gate = Arc::new(Semaphore::new(0));
        let fake = resolver(vec![asset("did:op:a")], false, Some(gate.clone()));
        let (mut fetcher, mut rx) = BookmarksFetcher::new(fake, pass_through());

        fetcher.issue(request(1, &["did:op:a"]));
        fetcher.issue(request(2, &["did:op:a"]));
        assert_eq!(fetcher.in_flight_generation(), Some(2));
        gate.add_permits(2);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.generation, 2);

        let extra = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(extra.is_err(), "the superseded fetch must not report");
    }

    #[tokio::test]
    async fn test_drop_cancels_in_flight_fetch() {
        let gate = Arc::new(Semaphore::new(0));
        let fake = resolver(vec![asset("did:op:a")], false, Some(gate.clone()));
        let (mut fetcher, mut rx) = BookmarksFetcher::new(fake, pass_through());

        fetcher.issue(request(1, &["did:op:a"]));
        drop(fetcher);
        gate.add_permits(1);

        // Sender side is gone once the cancelled task exits
        assert!(rx.recv().await.is_none());
    }
}
