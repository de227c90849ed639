use serde_json::Value;

/// Roles a training message may carry.
pub const ALLOWED_ROLES: [&str; 3] = ["system", "user", "assistant"];

/// A conversation needs at least a prompt and a response.
pub const MIN_MESSAGES: usize = 2;

/// Filters raw training records down to well-formed examples.
///
/// A record survives iff it has a `messages` array of at least
/// [`MIN_MESSAGES`] entries and every entry carries both a recognized
/// `role` and a `content` field. Malformed records are dropped silently;
/// surviving records pass through unchanged, extra fields included.
pub struct TrainingSetValidator;

impl TrainingSetValidator {
    pub fn is_valid_example(record: &Value) -> bool {
        let messages = match record.get("messages").and_then(Value::as_array) {
            Some(messages) => messages,
            None => return false,
        };

        if messages.len() < MIN_MESSAGES {
            return false;
        }

        messages.iter().all(Self::is_valid_message)
    }

    fn is_valid_message(message: &Value) -> bool {
        if message.get("content").is_none() {
            return false;
        }

        match message.get("role").and_then(Value::as_str) {
            Some(role) => ALLOWED_ROLES.contains(&role),
            None => false,
        }
    }

    /// Produces the filtered sequence, preserving input order.
    pub fn clean(records: Vec<Value>) -> Vec<Value> {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                if Self::is_valid_example(&record) {
                    Some(record)
                } else {
                    tracing::debug!(index, "dropping malformed training example");
                    None
                }
            })
            .collect()
    }
}
