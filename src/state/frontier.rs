//! Frontier queue of pending fetches
//!
//! The frontier is a single growing list drained through an index cursor.
//! Links discovered while a page is processed are appended to the tail and
//! become visible to later iterations, so the whole crawl is one FIFO pass.

/// Referrer recorded for the seed request
pub const SEED_REFERRER: &str = "command line";

/// A page waiting to be fetched, with the page that linked to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// URL to fetch
    pub target: String,

    /// Page the link was found on, or [`SEED_REFERRER`]
    pub referrer: String,
}

impl FetchRequest {
    /// Creates a request for a discovered link
    pub fn new(target: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            referrer: referrer.into(),
        }
    }

    /// Creates the seed request for the start URL
    pub fn seed(target: impl Into<String>) -> Self {
        Self::new(target, SEED_REFERRER)
    }
}

/// Append-only queue with a monotonically increasing read cursor
#[derive(Debug, Default)]
pub struct Frontier {
    requests: Vec<FetchRequest>,
    cursor: usize,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request to the tail
    pub fn push(&mut self, request: FetchRequest) {
        self.requests.push(request);
    }

    /// Total number of requests ever pushed
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Index of the next request to hand out
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true when every pushed request has been handed out
    pub fn is_drained(&self) -> bool {
        self.cursor >= self.requests.len()
    }

    /// Hands out the request at the cursor and advances it
    ///
    /// Requests are cloned out so the caller may keep pushing while holding
    /// the current one.
    pub fn next_request(&mut self) -> Option<FetchRequest> {
        let request = self.requests.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(request)
    }

    /// Every request pushed so far, in insertion order
    pub fn requests(&self) -> &[FetchRequest] {
        &self.requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(n: usize) -> FetchRequest {
        FetchRequest::new(format!("http://example.com/{}", n), "http://example.com/")
    }

    #[test]
    fn test_seed_referrer() {
        let seed = FetchRequest::seed("http://example.com/");
        assert_eq!(seed.referrer, "command line");
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        for n in 0..5 {
            frontier.push(request(n));
        }

        for n in 0..5 {
            assert_eq!(frontier.next_request(), Some(request(n)));
        }
        assert_eq!(frontier.next_request(), None);
    }

    #[test]
    fn test_grows_while_draining() {
        let mut frontier = Frontier::new();
        frontier.push(request(0));

        let first = frontier.next_request().unwrap();
        assert_eq!(first, request(0));
        assert!(frontier.is_drained());

        frontier.push(request(1));
        frontier.push(request(2));
        assert!(!frontier.is_drained());

        assert_eq!(frontier.next_request(), Some(request(1)));
        frontier.push(request(3));
        assert_eq!(frontier.next_request(), Some(request(2)));
        assert_eq!(frontier.next_request(), Some(request(3)));
        assert_eq!(frontier.next_request(), None);
    }

    #[test]
    fn test_never_shrinks() {
        let mut frontier = Frontier::new();
        frontier.push(request(0));
        frontier.push(request(1));

        let mut last_len = frontier.len();
        let mut last_position = frontier.position();
        while frontier.next_request().is_some() {
            assert!(frontier.len() >= last_len);
            assert!(frontier.position() > last_position);
            last_len = frontier.len();
            last_position = frontier.position();
        }

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.requests(), &[request(0), request(1)]);
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert!(frontier.is_drained());
        assert_eq!(frontier.next_request(), None);
        assert_eq!(frontier.position(), 0);
    }
}
