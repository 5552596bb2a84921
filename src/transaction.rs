/// A transfer between two accounts, the message format signed by the
/// signature engine and committed to by the proof-of-work search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub sender_id: String,
    pub receiver_id: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender_id: &str, receiver_id: &str, amount: u64) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            amount,
        }
    }

    /// Canonical `sender:receiver:amount` encoding. Both signing and
    /// proof-of-work hash exactly this string.
    pub fn canonical_string(&self) -> String {
        format!("{}:{}:{}", self.sender_id, self.receiver_id, self.amount)
    }
}
