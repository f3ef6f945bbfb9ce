//! # Event Envelope
//!
//! The message unit correlating a request with its eventual response across
//! decoupled components.
//!
//! ## Design Principles
//!
//! 1. **Passive Record**: The envelope carries exchange state; it never
//!    enforces it. Protocol rules live with the collaborators.
//! 2. **Identity Set Once**: `corr_id` and `time` are assigned at
//!    construction and survive every hop, including reply derivation.
//! 3. **Copy On Transition**: Each hop derives a new value via
//!    [`Event::respond`] instead of mutating a shared one, so exactly one
//!    writer ever holds a given instance.
//! 4. **Stable Wire Schema**: The serialized field names are the de facto
//!    schema version shared by every producer and consumer on the bus.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::Status;
use crate::{EventError, EventResult, CACHE_CLIENT, HEALTH_ACTION};

/// Message envelope for one eventually consistent exchange
///
/// A gateway constructs the envelope with [`Event::new`] and publishes it to
/// the bus. Whichever collaborator processes it publishes back a derived
/// copy carrying the same `corr_id`. Equality is structural over every
/// field, including `data` contents, which lets receivers deduplicate
/// redelivered copies of the same exchange.
///
/// # Type Parameter
///
/// * `T` - Payload element type carried in `data`
///
/// # Examples
///
/// ```rust
/// use event_model::{Event, Status};
///
/// let request: Event<String> = Event::new(
///     "org1".to_string(),
///     "employees".to_string(),
///     "GET_ALL_EMPLOYEES".to_string(),
///     "tokenA".to_string(),
/// );
///
/// assert_eq!(request.status, Status::New);
/// assert!(request.data.is_empty());
/// assert!(!request.corr_id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Event<T> {
    /// Unique identity of one logical exchange; assigned once at
    /// construction and never changed across hops
    pub corr_id: String,

    /// Command to execute at the provider or cache
    /// (e.g. "GET_ALL_EMPLOYEES"); open vocabulary owned by the
    /// surrounding system
    pub action: String,

    /// Current lifecycle state of the exchange
    pub status: Status,

    /// Creation time, epoch milliseconds; assigned once at construction.
    /// Collaborators use it for staleness and timeout decisions.
    pub time: i64,

    /// Organization the exchange is scoped to
    pub org_id: String,

    /// Name of the subsystem the exchange is destined for
    pub source: String,

    /// Caller that originated the exchange: an API token name, or the
    /// reserved cache sentinel
    pub client: String,

    /// Diagnostic detail, set only on failure paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload sequence: query filters or update data on the outbound leg,
    /// results or update status on the inbound leg. Never absent,
    /// possibly empty.
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Event<T> {
    /// Create the envelope that originates a new exchange
    ///
    /// The correlation id is a freshly generated UUID v4 (128-bit random,
    /// collision probability negligible for the lifetime of the system) and
    /// `time` is the current epoch-millisecond clock. Status starts at
    /// [`Status::New`] with an empty payload.
    ///
    /// # Arguments
    /// * `org_id` - Organization the exchange is scoped to
    /// * `source` - Subsystem the exchange is destined for
    /// * `action` - Command to execute
    /// * `client` - Originating caller identity
    pub fn new(org_id: String, source: String, action: String, client: String) -> Self {
        Self {
            corr_id: Uuid::new_v4().to_string(),
            action,
            status: Status::New,
            time: Utc::now().timestamp_millis(),
            org_id,
            source,
            client,
            message: None,
            data: Vec::new(),
        }
    }

    /// Set the lifecycle status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the diagnostic message
    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    /// Replace the payload sequence
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    /// Append one payload item, preserving the order of existing items
    pub fn add_data(&mut self, item: T) {
        self.data.push(item);
    }

    /// True if this envelope is a liveness probe
    ///
    /// Derived view over `action`, never part of the serialized
    /// representation.
    pub fn is_health_check(&self) -> bool {
        self.action == HEALTH_ACTION
    }

    /// True if the response cache originated this exchange
    ///
    /// Derived view over `client`, never part of the serialized
    /// representation.
    pub fn is_cache_originated(&self) -> bool {
        self.client == CACHE_CLIENT
    }

    /// Derive the reply envelope for this exchange
    ///
    /// The reply keeps the identity fields (`corr_id`, `time`) and the
    /// routing fields (`action`, `org_id`, `source`, `client`), asserts the
    /// given status, clears the diagnostic message, and starts with an
    /// empty payload of the reply element type.
    ///
    /// # Example
    /// ```rust
    /// use event_model::{Event, Status};
    ///
    /// let request: Event<String> = Event::new(
    ///     "org1".to_string(),
    ///     "employees".to_string(),
    ///     "GET_ALL_EMPLOYEES".to_string(),
    ///     "tokenA".to_string(),
    /// );
    ///
    /// let reply: Event<u64> = request.respond(Status::Error);
    /// assert_eq!(reply.corr_id, request.corr_id);
    /// assert_eq!(reply.time, request.time);
    /// ```
    pub fn respond<U>(&self, status: Status) -> Event<U> {
        Event {
            corr_id: self.corr_id.clone(),
            action: self.action.clone(),
            status,
            time: self.time,
            org_id: self.org_id.clone(),
            source: self.source.clone(),
            client: self.client.clone(),
            message: None,
            data: Vec::new(),
        }
    }
}

impl<T> Default for Event<T> {
    /// Empty envelope: initialized payload sequence, every other field at
    /// its zero value ([`Status::New`] for the status). Intended for
    /// collaborators that populate fields explicitly.
    fn default() -> Self {
        Self {
            corr_id: String::new(),
            action: String::new(),
            status: Status::New,
            time: 0,
            org_id: String::new(),
            source: String::new(),
            client: String::new(),
            message: None,
            data: Vec::new(),
        }
    }
}

impl<T: Serialize> Event<T> {
    /// Encode the envelope to its JSON wire form
    ///
    /// # Returns
    /// * `Ok(String)` containing the wire representation
    /// * `Err(EventError::SerializeError)` if the payload cannot be encoded
    pub fn to_json(&self) -> EventResult<String> {
        serde_json::to_string(self).map_err(|e| EventError::SerializeError(e.to_string()))
    }
}

impl<T: DeserializeOwned> Event<T> {
    /// Decode an envelope from its JSON wire form
    ///
    /// A missing `data` field decodes to an empty sequence; a missing
    /// `message` decodes to `None`.
    ///
    /// # Returns
    /// * `Ok(Event)` on success
    /// * `Err(EventError::DeserializeError)` if the input is not a valid
    ///   envelope
    pub fn from_json(json: &str) -> EventResult<Self> {
        serde_json::from_str(json).map_err(|e| EventError::DeserializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn employee_request() -> Event<String> {
        Event::new(
            "org1".to_string(),
            "svc".to_string(),
            "GET_ALL_EMPLOYEES".to_string(),
            "tokenA".to_string(),
        )
    }

    #[test]
    fn test_new_event_starts_fresh() {
        let event = employee_request();

        assert_eq!(event.status, Status::New);
        assert!(event.data.is_empty());
        assert!(!event.corr_id.is_empty());
        assert!(event.time > 0);
        assert_eq!(event.org_id, "org1");
        assert_eq!(event.source, "svc");
        assert_eq!(event.client, "tokenA");
        assert!(event.message.is_none());
    }

    #[test]
    fn test_corr_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let event = employee_request();
            assert!(
                seen.insert(event.corr_id.clone()),
                "duplicate corr_id: {}",
                event.corr_id
            );
        }
    }

    #[test]
    fn test_add_data_appends_in_order() {
        let mut event = employee_request();

        event.add_data("first".to_string());
        assert_eq!(event.data.len(), 1);

        event.add_data("second".to_string());
        assert_eq!(event.data, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_health_check_predicate() {
        let probe: Event<String> = Event::new(
            "org1".to_string(),
            "svc".to_string(),
            HEALTH_ACTION.to_string(),
            "tokenA".to_string(),
        );
        assert!(probe.is_health_check());

        let query = employee_request();
        assert!(!query.is_health_check());
    }

    #[test]
    fn test_cache_originated_predicate() {
        let from_cache: Event<String> = Event::new(
            "org1".to_string(),
            "svc".to_string(),
            "GET_ALL_EMPLOYEES".to_string(),
            CACHE_CLIENT.to_string(),
        );
        assert!(from_cache.is_cache_originated());
        assert!(!employee_request().is_cache_originated());
    }

    #[test]
    fn test_clone_is_structurally_equal() {
        let mut event = employee_request();
        event.add_data("row".to_string());

        let copy = event.clone();
        assert_eq!(copy, event);

        // Value clone: growing the copy leaves the original untouched
        let mut copy = copy;
        copy.add_data("extra".to_string());
        assert_eq!(event.data.len(), 1);
        assert_eq!(copy.data.len(), 2);
    }

    #[test]
    fn test_respond_keeps_identity_and_resets_payload() {
        let request = employee_request()
            .with_message("should not survive".to_string());

        let reply: Event<String> = request.respond(Status::Success);

        assert_eq!(reply.corr_id, request.corr_id);
        assert_eq!(reply.time, request.time);
        assert_eq!(reply.action, request.action);
        assert_eq!(reply.org_id, request.org_id);
        assert_eq!(reply.source, request.source);
        assert_eq!(reply.client, request.client);
        assert_eq!(reply.status, Status::Success);
        assert!(reply.message.is_none());
        assert!(reply.data.is_empty());
    }

    #[test]
    fn test_respond_can_change_payload_type() {
        let request = employee_request();
        let reply: Event<u64> = request.respond(Status::Error);

        assert_eq!(reply.corr_id, request.corr_id);
        assert!(reply.data.is_empty());
    }

    #[test]
    fn test_default_event_has_zero_values() {
        let event: Event<String> = Event::default();

        assert!(event.corr_id.is_empty());
        assert!(event.action.is_empty());
        assert_eq!(event.status, Status::New);
        assert_eq!(event.time, 0);
        assert!(event.org_id.is_empty());
        assert!(event.source.is_empty());
        assert!(event.client.is_empty());
        assert!(event.message.is_none());
        assert!(event.data.is_empty());
    }

    #[test]
    fn test_builders() {
        let event = employee_request()
            .with_status(Status::Error)
            .with_message("provider unreachable".to_string())
            .with_data(vec!["partial".to_string()]);

        assert_eq!(event.status, Status::Error);
        assert_eq!(event.message.as_deref(), Some("provider unreachable"));
        assert_eq!(event.data, vec!["partial".to_string()]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut event = employee_request().with_status(Status::Success);
        event.add_data("employee record".to_string());

        let json = event.to_json().unwrap();
        let decoded: Event<String> = Event::from_json(&json).unwrap();

        assert_eq!(decoded, event);
        assert_eq!(decoded.data.len(), 1);
        assert_eq!(decoded.status, Status::Success);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result: EventResult<Event<String>> = Event::from_json("not an envelope");
        assert!(matches!(result, Err(EventError::DeserializeError(_))));
    }
}
