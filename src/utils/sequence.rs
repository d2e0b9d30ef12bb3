/// Identifies one issued request; only the most recent token is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic token source used to drop responses that arrive after a newer
/// request was issued
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let mut sequence = RequestSequence::default();
        let slow = sequence.issue();
        let fast = sequence.issue();

        assert!(sequence.is_current(fast));
        // the earlier request resolving last must not win
        assert!(!sequence.is_current(slow));
        assert!(slow < fast);
    }
}
