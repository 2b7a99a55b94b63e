// SPDX-License-Identifier: MPL-2.0
//! Search session state machine.
//!
//! A [`Session`] owns everything the gallery derives its rendering from:
//! the active query, the 1-based page counter, the accumulated hits, the
//! total match count, the pagination flag, and the loading flag. Mutations
//! happen through four operations — [`Session::submit`],
//! [`Session::advance`], [`Session::settle_page`], and
//! [`Session::settle_error`] — so every trigger point is explicit and
//! testable rather than hidden behind reactive recomputation.
//!
//! Each submit bumps a generation counter and every fetch request carries
//! the generation it was issued under. A settlement whose generation no
//! longer matches is discarded without touching any state, so a slow
//! response for an abandoned query can never leak into the next one.

use crate::api::{ImageHit, SearchPage, PER_PAGE};

/// A fetch the application should dispatch, produced by `submit`/`advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    pub generation: u64,
}

/// Outcome of settling a fetch against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// Hits were appended. `first_page` drives the "found N images" toast.
    Loaded {
        appended: usize,
        total_hits: u64,
        first_page: bool,
    },
    /// The response carried zero hits; accumulated results are untouched.
    Empty,
    /// The fetch raised; accumulated results and pagination are untouched.
    Failed,
    /// The response belonged to a superseded query and was discarded.
    Stale,
}

/// State for one long-lived search view.
#[derive(Debug, Default)]
pub struct Session {
    query: String,
    page: u32,
    generation: u64,
    hits: Vec<ImageHit>,
    total_hits: u64,
    has_more: bool,
    loading: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active query; empty when no search has been submitted.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// 1-based index of the most recently requested page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Accumulated hits for the active query, in fetch order.
    #[must_use]
    pub fn hits(&self) -> &[ImageHit] {
        &self.hits
    }

    /// Total match count the API reported for the active query.
    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Whether further pages are known to remain.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a search fetch is currently outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a fresh search for `raw` (trimmed).
    ///
    /// Resets the page counter, clears accumulated hits, bumps the
    /// generation so in-flight responses for the previous query are
    /// discarded on arrival, and returns the fetch to dispatch. Empty or
    /// whitespace-only input produces no fetch and leaves state untouched.
    /// Resubmitting the identical text runs a fresh search.
    pub fn submit(&mut self, raw: &str) -> Option<FetchRequest> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }

        self.query = query.to_string();
        self.page = 1;
        self.hits.clear();
        self.total_hits = 0;
        self.has_more = false;
        self.generation += 1;
        self.loading = true;

        Some(self.request())
    }

    /// Requests the next page of the active query.
    ///
    /// No-op while a fetch is outstanding or when no further pages remain,
    /// so overlapping requests cannot corrupt the page counter.
    pub fn advance(&mut self) -> Option<FetchRequest> {
        if self.loading || !self.has_more {
            return None;
        }

        self.page += 1;
        self.loading = true;

        Some(self.request())
    }

    /// Settles a successful fetch issued under `generation`.
    ///
    /// Zero hits settle as [`Settled::Empty`] with the pagination flag
    /// forced off. Otherwise hits are appended in response order and the
    /// flag is recomputed from the reported total. The loading flag is
    /// cleared on every non-stale branch.
    pub fn settle_page(&mut self, generation: u64, page: SearchPage) -> Settled {
        if generation != self.generation {
            return Settled::Stale;
        }

        let settled = if page.hits.is_empty() {
            self.has_more = false;
            Settled::Empty
        } else {
            let appended = page.hits.len();
            self.hits.extend(page.hits);
            self.total_hits = page.total_hits;
            self.has_more = page.total_hits > u64::from(PER_PAGE) * u64::from(self.page);
            Settled::Loaded {
                appended,
                total_hits: page.total_hits,
                first_page: self.page == 1,
            }
        };

        self.loading = false;
        settled
    }

    /// Settles a failed fetch issued under `generation`.
    ///
    /// Accumulated hits and the pagination flag keep their prior values;
    /// only the loading flag is cleared.
    pub fn settle_error(&mut self, generation: u64) -> Settled {
        if generation != self.generation {
            return Settled::Stale;
        }

        self.loading = false;
        Settled::Failed
    }

    fn request(&self) -> FetchRequest {
        FetchRequest {
            query: self.query.clone(),
            page: self.page,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64) -> ImageHit {
        ImageHit {
            id,
            webformat_url: format!("https://example.org/{id}_640.jpg"),
            large_image_url: format!("https://example.org/{id}_1280.jpg"),
            tags: format!("tag-{id}"),
        }
    }

    fn page_of(total_hits: u64, ids: &[u64]) -> SearchPage {
        SearchPage {
            total_hits,
            hits: ids.iter().copied().map(hit).collect(),
        }
    }

    #[test]
    fn submit_resets_results_and_page_before_any_settlement() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(30, &[1, 2, 3]));
        session.advance().expect("more pages remain");

        let req = session.submit("dogs").expect("fetch expected");

        assert_eq!(req.page, 1);
        assert_eq!(session.page(), 1);
        assert!(session.hits().is_empty());
        assert_eq!(session.total_hits(), 0);
        assert!(!session.has_more());
        assert!(session.is_loading());
        assert_eq!(req.query, "dogs");
    }

    #[test]
    fn submit_trims_whitespace() {
        let mut session = Session::new();
        let req = session.submit("  mountain lake ").expect("fetch expected");
        assert_eq!(req.query, "mountain lake");
        assert_eq!(session.query(), "mountain lake");
    }

    #[test]
    fn whitespace_only_submit_never_fetches() {
        let mut session = Session::new();

        assert!(session.submit("").is_none());
        assert!(session.submit("   \t").is_none());
        assert!(!session.is_loading());
        assert_eq!(session.query(), "");
    }

    #[test]
    fn advance_is_noop_while_loading() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(30, &[1]));
        assert!(session.has_more());

        session.advance().expect("first advance runs");
        // Still loading: a second press must not move the page counter.
        assert!(session.advance().is_none());
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn advance_is_noop_when_exhausted() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(2, &[1, 2]));

        assert!(!session.has_more());
        assert!(session.advance().is_none());
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn page_and_results_grow_monotonically_within_one_query() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(30, &[1, 2]));
        let len_after_first = session.hits().len();

        let req = session.advance().expect("more pages remain");
        assert!(req.page > 1);
        session.settle_page(req.generation, page_of(30, &[3, 4]));

        assert!(session.hits().len() >= len_after_first);
        assert_eq!(
            session.hits().iter().map(|h| h.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn pagination_flag_from_total_and_page() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");

        // totalHits = 30, page 1, page size 12: 18 remain.
        let settled = session.settle_page(req.generation, page_of(30, &[1]));
        assert!(matches!(settled, Settled::Loaded { .. }));
        assert!(session.has_more());

        let req = session.advance().expect("page 2");
        session.settle_page(req.generation, page_of(30, &[2]));
        assert!(session.has_more());

        // Page 3 with the same total: 30 - 36 <= 0.
        let req = session.advance().expect("page 3");
        session.settle_page(req.generation, page_of(30, &[3]));
        assert!(!session.has_more());
    }

    #[test]
    fn empty_page_keeps_results_and_clears_pagination() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(30, &[1, 2]));

        let req = session.advance().expect("more pages remain");
        let settled = session.settle_page(req.generation, page_of(30, &[]));

        assert_eq!(settled, Settled::Empty);
        assert_eq!(session.hits().len(), 2);
        assert!(!session.has_more());
        assert!(!session.is_loading());
    }

    #[test]
    fn error_keeps_results_and_pagination() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        session.settle_page(req.generation, page_of(30, &[1, 2]));

        let req = session.advance().expect("more pages remain");
        let settled = session.settle_error(req.generation);

        assert_eq!(settled, Settled::Failed);
        assert_eq!(session.hits().len(), 2);
        assert!(session.has_more());
        assert!(!session.is_loading());
    }

    #[test]
    fn loading_flag_clears_on_every_settlement_kind() {
        let mut session = Session::new();

        let req = session.submit("a").expect("fetch expected");
        session.settle_page(req.generation, page_of(1, &[1]));
        assert!(!session.is_loading());

        let req = session.submit("b").expect("fetch expected");
        session.settle_page(req.generation, page_of(0, &[]));
        assert!(!session.is_loading());

        let req = session.submit("c").expect("fetch expected");
        session.settle_error(req.generation);
        assert!(!session.is_loading());
    }

    #[test]
    fn stale_settlement_is_discarded_entirely() {
        let mut session = Session::new();
        let old = session.submit("cats").expect("fetch expected");
        let new = session.submit("dogs").expect("fetch expected");

        // The slow response for "cats" arrives after "dogs" reset state.
        let settled = session.settle_page(old.generation, page_of(100, &[1, 2]));

        assert_eq!(settled, Settled::Stale);
        assert!(session.hits().is_empty());
        assert!(session.is_loading());
        assert!(!session.has_more());

        // The current query settles normally afterwards.
        let settled = session.settle_page(new.generation, page_of(2, &[7, 8]));
        assert!(matches!(settled, Settled::Loaded { .. }));
        assert_eq!(
            session.hits().iter().map(|h| h.id).collect::<Vec<_>>(),
            vec![7, 8]
        );
    }

    #[test]
    fn stale_error_does_not_clear_loading_of_newer_fetch() {
        let mut session = Session::new();
        let old = session.submit("cats").expect("fetch expected");
        session.submit("dogs").expect("fetch expected");

        assert_eq!(session.settle_error(old.generation), Settled::Stale);
        assert!(session.is_loading());
    }

    #[test]
    fn first_page_flag_only_on_page_one() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");
        let settled = session.settle_page(req.generation, page_of(30, &[1]));
        assert!(matches!(settled, Settled::Loaded { first_page: true, .. }));

        let req = session.advance().expect("page 2");
        let settled = session.settle_page(req.generation, page_of(30, &[2]));
        assert!(matches!(
            settled,
            Settled::Loaded {
                first_page: false,
                ..
            }
        ));
    }

    #[test]
    fn exhausted_on_first_page_when_total_fits() {
        let mut session = Session::new();
        let req = session.submit("cats").expect("fetch expected");

        // totalHits = 2 fits entirely in one page of 12.
        let settled = session.settle_page(req.generation, page_of(2, &[10, 11]));

        assert!(matches!(
            settled,
            Settled::Loaded {
                appended: 2,
                total_hits: 2,
                first_page: true,
            }
        ));
        assert!(!session.has_more());
    }
}
