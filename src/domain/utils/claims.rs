use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Inner = HashSet<u64>;

/// Requesters whose ticket channel is currently being created.
#[derive(Clone, Default)]
pub struct TicketClaims {
    inner: Arc<Mutex<Inner>>,
}

/// Held while a ticket is being created; dropping it releases the requester.
pub struct ClaimGuard {
    requester: u64,
    inner: Arc<Mutex<Inner>>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TicketClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when the requester already holds a claim.
    pub fn try_claim(&self, requester: u64) -> Option<ClaimGuard> {
        if !lock(&self.inner).insert(requester) {
            return None;
        }

        Some(ClaimGuard {
            requester,
            inner: Arc::clone(&self.inner),
        })
    }

    #[cfg(test)]
    pub fn is_claimed(&self, requester: u64) -> bool {
        lock(&self.inner).contains(&requester)
    }
}

#[cfg(test)]
impl ClaimGuard {
    pub fn requester(&self) -> u64 {
        self.requester
    }
}

impl Drop for ClaimGuard {
    fn drop(&mut self) {
        lock(&self.inner).remove(&self.requester);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_claim() {
        let claims = TicketClaims::new();
        let guard = claims.try_claim(1).unwrap();
        assert_eq!(guard.requester(), 1);
        assert!(claims.is_claimed(1));
        assert!(!claims.is_claimed(2));
    }

    #[test]
    fn test_second_claim_rejected() {
        let claims = TicketClaims::new();
        let _guard = claims.try_claim(1).unwrap();
        assert!(claims.try_claim(1).is_none());
        assert!(claims.try_claim(2).is_some());
    }

    #[test]
    fn test_drop_releases() {
        let claims = TicketClaims::new();
        {
            let _guard = claims.try_claim(1).unwrap();
        }
        assert!(!claims.is_claimed(1));
        assert!(claims.try_claim(1).is_some());
    }

    #[test]
    fn test_clones_share_claims() {
        let claims = TicketClaims::new();
        let other = claims.clone();
        let _guard = claims.try_claim(7).unwrap();
        assert!(other.try_claim(7).is_none());
    }

    #[tokio::test]
    async fn test_concurrent_claims() {
        let claims = TicketClaims::new();
        let (a, b) = (claims.clone(), claims.clone());

        let (Ok(a), Ok(b)) = tokio::join!(
            tokio::spawn(async move {
                let guard = a.try_claim(1);
                tokio::time::sleep(Duration::from_millis(10)).await;
                guard.is_some()
            }),
            tokio::spawn(async move {
                let guard = b.try_claim(1);
                tokio::time::sleep(Duration::from_millis(10)).await;
                guard.is_some()
            }),
        ) else {
            panic!("test went wrong")
        };

        assert!(a ^ b);
        assert!(!claims.is_claimed(1));
    }
}
