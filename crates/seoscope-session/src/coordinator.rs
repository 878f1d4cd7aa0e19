//! The invocation coordinator.
//!
//! [`Coordinator::submit`] is the single entry point for running a tool: it
//! validates the request, dispatches it to the Gemini API with retries,
//! interprets the response per the tool's [`ToolKind`], and settles the
//! outcome into session state. Settlement is correlated by dispatch number,
//! so an outcome whose invocation was superseded by a tool switch is
//! dropped instead of overwriting newer state.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use seoscope_catalog::{ToolDescriptor, ToolKind};
use seoscope_core::{ErrorKind, InvocationError, InvocationRequest, InvocationResult};
use seoscope_credentials::{CREDENTIAL_KEY, CredentialStore, meets_minimum_length};
use seoscope_gemini::{GeminiClient, GenerateRequest, RetryExecutor, parse_report, report_schema};
use seoscope_settings::Settings;

use crate::state::{SessionBusy, SessionState};

/// Final outcome of an accepted invocation.
pub type Settlement = Result<InvocationResult, InvocationError>;

/// Orchestrates tool invocations against the Gemini API for one session.
pub struct Coordinator {
    client: GeminiClient,
    retry: RetryExecutor,
    credentials: Arc<dyn CredentialStore>,
    session: Arc<SessionState>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("model", &self.client.model())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Coordinator {
    /// Create a coordinator with the flagship tool active.
    #[must_use]
    pub fn new(
        client: GeminiClient,
        retry: RetryExecutor,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            client,
            retry,
            credentials,
            session: Arc::new(SessionState::new(seoscope_catalog::core_tool().id)),
        }
    }

    /// Create a coordinator wired up from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, credentials: Arc<dyn CredentialStore>) -> Self {
        let client = GeminiClient::new(&settings.service.base_url, &settings.service.model)
            .timeout(Duration::from_millis(settings.service.request_timeout_ms));
        Self::new(client, RetryExecutor::new(settings.retry.clone()), credentials)
    }

    /// The session state this coordinator writes into.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Run `tool_id` against `user_input` and settle the outcome.
    ///
    /// At most one invocation runs at a time: while one is in flight this
    /// returns [`SessionBusy`] without touching session state. An accepted
    /// submission always settles with a [`Settlement`], and the same
    /// settlement lands in session state unless a tool switch superseded
    /// the invocation first.
    ///
    /// Validation happens before any network traffic, in a fixed order:
    /// a missing or too-short credential, then blank input, then an
    /// unrecognized tool id. Validation failures settle as errors rather
    /// than being rejected up front, so they are observable in the session
    /// like any other failed invocation.
    ///
    /// # Errors
    ///
    /// [`SessionBusy`] when another invocation is already in flight.
    #[instrument(skip_all, fields(tool_id = %tool_id))]
    pub async fn submit(&self, tool_id: &str, user_input: &str) -> Result<Settlement, SessionBusy> {
        let seq = self.session.begin(tool_id)?;
        let guard = FlightGuard::new(Arc::clone(&self.session), seq);
        debug!(seq, "submission accepted");

        let request = InvocationRequest {
            tool_id: tool_id.to_string(),
            user_input: user_input.to_string(),
            credential: self.credentials.get(CREDENTIAL_KEY),
        };

        let outcome = match validate(&request) {
            Ok((descriptor, api_key)) => {
                self.dispatch(descriptor, &api_key, &request.user_input).await
            }
            Err(error) => Err(error),
        };

        Ok(self.settle(guard, tool_id, outcome))
    }

    /// Make `tool_id` the active tool.
    ///
    /// Resets the session snapshot and logically cancels any in-flight
    /// invocation: its settlement will arrive stale and be dropped.
    ///
    /// # Errors
    ///
    /// [`InvocationError`] of kind [`ErrorKind::UnknownTool`] when the id
    /// is not in the catalog; the session is left untouched.
    pub fn switch_tool(&self, tool_id: &str) -> Result<(), InvocationError> {
        let descriptor = seoscope_catalog::resolve(tool_id).ok_or_else(|| {
            InvocationError::new(
                tool_id,
                ErrorKind::UnknownTool,
                format!("no tool registered with id `{tool_id}`"),
            )
        })?;
        self.session.switch_tool(descriptor.id);
        info!(tool_id = descriptor.id, "switched active tool");
        Ok(())
    }

    /// Send the prompt for one validated invocation and interpret the reply.
    async fn dispatch(
        &self,
        descriptor: &'static ToolDescriptor,
        api_key: &str,
        user_input: &str,
    ) -> Settlement {
        let prompt = descriptor.build_prompt(user_input);
        let mut wire = GenerateRequest::new(&prompt.system_prompt, &prompt.user_query);
        if descriptor.is_core() {
            wire = wire.with_response_schema(report_schema());
        }

        let response = self
            .retry
            .execute(|| self.client.generate(api_key, &wire))
            .await
            .map_err(|err| {
                InvocationError::with_cause(
                    descriptor.id,
                    ErrorKind::ExhaustedRetries,
                    format!("gave up after {} attempts", err.attempts),
                    err.last.to_string(),
                )
            })?;

        let text = response.first_text().ok_or_else(|| {
            InvocationError::new(
                descriptor.id,
                ErrorKind::EmptyResponseBody,
                "response contained no text content",
            )
        })?;

        match descriptor.kind {
            ToolKind::SchemaDriven => {
                let payload = parse_report(text).map_err(|err| {
                    InvocationError::with_cause(
                        descriptor.id,
                        ErrorKind::MalformedSchemaResponse,
                        "structured report did not match the schema",
                        err.to_string(),
                    )
                })?;
                Ok(InvocationResult::Structured {
                    tool_id: descriptor.id.to_string(),
                    payload,
                })
            }
            ToolKind::FreeText => {
                if text.trim().is_empty() {
                    return Err(InvocationError::new(
                        descriptor.id,
                        ErrorKind::EmptyResponseBody,
                        "response text was empty",
                    ));
                }
                Ok(InvocationResult::Text {
                    tool_id: descriptor.id.to_string(),
                    text: text.to_string(),
                    produced_at: Utc::now(),
                })
            }
        }
    }

    /// Write the outcome into session state and hand it to the caller.
    fn settle(&self, guard: FlightGuard, tool_id: &str, outcome: Settlement) -> Settlement {
        let seq = guard.seq();
        let written = self.session.settle(seq, tool_id, &outcome);
        guard.disarm();
        if written {
            match &outcome {
                Ok(result) => {
                    info!(structured = result.is_structured(), "invocation settled");
                }
                Err(error) => warn!(kind = %error.kind, "invocation failed"),
            }
        } else {
            debug!(seq, "settlement superseded by a tool switch");
        }
        outcome
    }
}

/// Pre-dispatch checks, cheapest first and all before any network traffic.
fn validate(
    request: &InvocationRequest,
) -> Result<(&'static ToolDescriptor, String), InvocationError> {
    let tool_id = request.tool_id.as_str();

    let credential = request
        .credential
        .as_deref()
        .filter(|value| meets_minimum_length(value))
        .ok_or_else(|| {
            InvocationError::new(
                tool_id,
                ErrorKind::MissingCredential,
                "no usable API credential is configured",
            )
        })?;

    if request.user_input.trim().is_empty() {
        return Err(InvocationError::new(
            tool_id,
            ErrorKind::EmptyInput,
            "input must not be blank",
        ));
    }

    let descriptor = seoscope_catalog::resolve(tool_id).ok_or_else(|| {
        InvocationError::new(
            tool_id,
            ErrorKind::UnknownTool,
            format!("no tool registered with id `{tool_id}`"),
        )
    })?;

    Ok((descriptor, credential.to_string()))
}

/// Clears the loading flag if an accepted submission never settles.
///
/// Armed from `begin` until `settle`; dropping it armed means the submit
/// future was abandoned mid-flight, and the session would otherwise stay
/// loading forever. The stale-seq check in `abandon` makes a late drop
/// after a tool switch a no-op.
struct FlightGuard {
    session: Arc<SessionState>,
    seq: u64,
    armed: bool,
}

impl FlightGuard {
    fn new(session: Arc<SessionState>, seq: u64) -> Self {
        Self {
            session,
            seq,
            armed: true,
        }
    }

    fn seq(&self) -> u64 {
        self.seq
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        if self.armed {
            self.session.abandon(self.seq);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use seoscope_core::RetryPolicy;
    use seoscope_credentials::MemoryCredentialStore;
    use seoscope_settings::ServiceSettings;

    const TEST_KEY: &str = "AIzaSyTestKey123";

    const REPORT_JSON: &str = r#"{"targetTopic":"cloud storage","relatedKeywords":["a","b","c"],"contentStructure":[{"sectionTitle":"S1","coverageGoal":"G1"}]}"#;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay_ms: 1,
            jitter_cap_ms: 0,
        }
    }

    fn coordinator_for(server: &wiremock::MockServer) -> Coordinator {
        coordinator_with_store(server, MemoryCredentialStore::with_credential(TEST_KEY))
    }

    fn coordinator_with_store(
        server: &wiremock::MockServer,
        store: MemoryCredentialStore,
    ) -> Coordinator {
        Coordinator::new(
            GeminiClient::new(server.uri(), "gemini-2.5-flash"),
            RetryExecutor::new(fast_policy(3)),
            Arc::new(store),
        )
    }

    fn text_response(text: &str) -> wiremock::ResponseTemplate {
        wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        }))
    }

    async fn mount_refusing_network(server: &wiremock::MockServer) {
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response("unexpected"))
            .expect(0)
            .mount(server)
            .await;
    }

    // ── happy paths ─────────────────────────────────────────────────

    #[tokio::test]
    async fn flagship_submission_settles_with_structured_report() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path(
                "/models/gemini-2.5-flash:generateContent",
            ))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(text_response(REPORT_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("keyword-insight", "cloud storage")
            .await
            .unwrap();

        assert_matches!(settlement.unwrap(), InvocationResult::Structured { tool_id, payload } => {
            assert_eq!(tool_id, "keyword-insight");
            assert_eq!(payload.target_topic, "cloud storage");
            assert_eq!(payload.related_keywords, vec!["a", "b", "c"]);
            assert_eq!(payload.content_structure[0].section_title, "S1");
        });

        let snapshot = coordinator.session().snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.result.is_some());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn generic_submission_settles_with_timestamped_text() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response("1. Ten Rust tips\n2. Rust for SEO"))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("title-generator", "rust tutorials")
            .await
            .unwrap();

        assert_matches!(settlement.unwrap(), InvocationResult::Text { tool_id, text, .. } => {
            assert_eq!(tool_id, "title-generator");
            assert!(text.contains("Ten Rust tips"));
        });

        // Only the flagship tool carries a generation config
        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_some());
    }

    // ── validation (no network traffic) ─────────────────────────────

    #[tokio::test]
    async fn missing_credential_settles_without_network_for_every_tool() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let coordinator = coordinator_with_store(&server, MemoryCredentialStore::new());
        for descriptor in seoscope_catalog::all() {
            let settlement = coordinator
                .submit(descriptor.id, "cloud storage")
                .await
                .unwrap();

            let error = settlement.unwrap_err();
            assert_eq!(error.kind, ErrorKind::MissingCredential);
            assert_eq!(error.tool_id, descriptor.id);
        }

        let snapshot = coordinator.session().snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error.unwrap().kind, ErrorKind::MissingCredential);
    }

    #[tokio::test]
    async fn ten_character_credential_is_treated_as_missing() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let store = MemoryCredentialStore::with_credential("0123456789");
        let coordinator = coordinator_with_store(&server, store);
        let settlement = coordinator.submit("title-generator", "anything").await.unwrap();

        assert_eq!(settlement.unwrap_err().kind, ErrorKind::MissingCredential);
    }

    #[tokio::test]
    async fn blank_input_settles_empty_input_for_every_tool() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let coordinator = coordinator_for(&server);
        for descriptor in seoscope_catalog::all() {
            let settlement = coordinator.submit(descriptor.id, " \n\t ").await.unwrap();

            let error = settlement.unwrap_err();
            assert_eq!(error.kind, ErrorKind::EmptyInput);
            assert_eq!(error.message, "input must not be blank");
        }
    }

    #[tokio::test]
    async fn unrecognized_tool_settles_unknown_tool() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator.submit("rank-tracker", "example.com").await.unwrap();

        let error = settlement.unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnknownTool);
        assert!(error.message.contains("rank-tracker"));
        // The unknown id is still what the error settled against
        assert_eq!(coordinator.session().active_tool_id(), "rank-tracker");
    }

    #[tokio::test]
    async fn missing_credential_outranks_other_validation_failures() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let coordinator = coordinator_with_store(&server, MemoryCredentialStore::new());
        let settlement = coordinator.submit("rank-tracker", "   ").await.unwrap();

        assert_eq!(settlement.unwrap_err().kind, ErrorKind::MissingCredential);
    }

    #[tokio::test]
    async fn blank_input_outranks_unknown_tool() {
        let server = wiremock::MockServer::start().await;
        mount_refusing_network(&server).await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator.submit("rank-tracker", "   ").await.unwrap();

        assert_eq!(settlement.unwrap_err().kind, ErrorKind::EmptyInput);
    }

    // ── transport failures and retries ──────────────────────────────

    #[tokio::test]
    async fn transient_failures_are_retried_to_success() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(503).set_body_string("overloaded"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response("recovered"))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("title-generator", "rust tutorials")
            .await
            .unwrap();

        assert_matches!(settlement.unwrap(), InvocationResult::Text { text, .. } => {
            assert_eq!(text, "recovered");
        });
    }

    #[tokio::test]
    async fn persistent_failures_settle_exhausted_retries() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("internal"))
            .expect(3)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("keyword-insight", "cloud storage")
            .await
            .unwrap();

        let error = settlement.unwrap_err();
        assert_eq!(error.kind, ErrorKind::ExhaustedRetries);
        assert!(error.message.contains("3 attempts"));
        let cause = error.cause.unwrap();
        assert!(cause.contains("HTTP 500"), "cause was: {cause}");

        let snapshot = coordinator.session().snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.result.is_none());
    }

    // ── response interpretation ─────────────────────────────────────

    #[tokio::test]
    async fn response_without_candidates_settles_empty_response_body() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator.submit("title-generator", "anything").await.unwrap();

        // A 200 with no text is not a transport failure, so no retries
        assert_eq!(settlement.unwrap_err().kind, ErrorKind::EmptyResponseBody);
    }

    #[tokio::test]
    async fn whitespace_only_text_settles_empty_response_body() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response("  \n "))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("meta-description", "page about rust")
            .await
            .unwrap();

        assert_eq!(settlement.unwrap_err().kind, ErrorKind::EmptyResponseBody);
    }

    #[tokio::test]
    async fn unparseable_report_settles_malformed_schema_response() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("keyword-insight", "cloud storage")
            .await
            .unwrap();

        let error = settlement.unwrap_err();
        assert_eq!(error.kind, ErrorKind::MalformedSchemaResponse);
        assert!(error.cause.is_some());
    }

    #[tokio::test]
    async fn empty_report_text_settles_malformed_schema_response() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(text_response(""))
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = coordinator_for(&server);
        let settlement = coordinator
            .submit("keyword-insight", "cloud storage")
            .await
            .unwrap();

        // For the schema-driven tool an empty payload is a schema failure,
        // not a missing response
        assert_eq!(
            settlement.unwrap_err().kind,
            ErrorKind::MalformedSchemaResponse
        );
    }

    // ── concurrency and supersession ────────────────────────────────

    #[tokio::test]
    async fn second_submission_while_in_flight_is_refused() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(
                text_response("slow answer").set_delay(std::time::Duration::from_millis(250)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = Arc::new(coordinator_for(&server));
        let flight = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("title-generator", "first").await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let busy = coordinator
            .submit("meta-description", "second")
            .await
            .unwrap_err();
        assert_eq!(busy.active_tool_id, "title-generator");

        // The refusal left the in-flight invocation to settle normally
        let settlement = flight.await.unwrap().unwrap();
        assert_matches!(settlement.unwrap(), InvocationResult::Text { tool_id, .. } => {
            assert_eq!(tool_id, "title-generator");
        });
        let snapshot = coordinator.session().snapshot();
        assert_eq!(snapshot.active_tool_id, "title-generator");
        assert!(snapshot.result.is_some());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn switching_tools_mid_flight_discards_the_settlement() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(
                text_response("late answer").set_delay(std::time::Duration::from_millis(250)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = Arc::new(coordinator_for(&server));
        let flight = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("title-generator", "first").await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        coordinator.switch_tool("on-page-audit").unwrap();

        // The caller still gets the outcome; the session does not
        let settlement = flight.await.unwrap().unwrap();
        assert!(settlement.is_ok());

        let snapshot = coordinator.session().snapshot();
        assert_eq!(snapshot.active_tool_id, "on-page-audit");
        assert!(!snapshot.loading);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn switching_away_and_back_still_discards_the_settlement() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(
                text_response("late answer").set_delay(std::time::Duration::from_millis(250)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let coordinator = Arc::new(coordinator_for(&server));
        let flight = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("title-generator", "first").await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        coordinator.switch_tool("on-page-audit").unwrap();
        coordinator.switch_tool("title-generator").unwrap();

        let settlement = flight.await.unwrap().unwrap();
        assert!(settlement.is_ok());

        let snapshot = coordinator.session().snapshot();
        assert_eq!(snapshot.active_tool_id, "title-generator");
        assert!(
            snapshot.result.is_none(),
            "returning to the tool must not resurrect the superseded result"
        );
    }

    #[tokio::test]
    async fn aborted_submission_does_not_leave_the_session_loading() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(
                text_response("never delivered").set_delay(std::time::Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let coordinator = Arc::new(coordinator_for(&server));
        let flight = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("title-generator", "doomed").await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(coordinator.session().is_loading());

        flight.abort();
        let _ = flight.await;

        let snapshot = coordinator.session().snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
    }

    // ── tool switching and construction ─────────────────────────────

    #[tokio::test]
    async fn new_coordinator_starts_on_the_flagship_tool() {
        let server = wiremock::MockServer::start().await;
        let coordinator = coordinator_for(&server);

        assert_eq!(coordinator.session().active_tool_id(), "keyword-insight");
        assert!(!coordinator.session().is_loading());
    }

    #[tokio::test]
    async fn switch_tool_updates_the_active_tool() {
        let server = wiremock::MockServer::start().await;
        let coordinator = coordinator_for(&server);

        coordinator.switch_tool("robots-advisor").unwrap();
        assert_eq!(coordinator.session().active_tool_id(), "robots-advisor");
    }

    #[tokio::test]
    async fn switch_to_unknown_tool_is_rejected() {
        let server = wiremock::MockServer::start().await;
        let coordinator = coordinator_for(&server);

        let error = coordinator.switch_tool("rank-tracker").unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnknownTool);
        assert_eq!(coordinator.session().active_tool_id(), "keyword-insight");
    }

    #[tokio::test]
    async fn from_settings_builds_a_working_coordinator() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path(
                "/models/gemini-2.5-flash:generateContent",
            ))
            .respond_with(text_response("settings ok"))
            .expect(1)
            .mount(&server)
            .await;

        let settings = Settings {
            service: ServiceSettings {
                base_url: server.uri(),
                ..ServiceSettings::default()
            },
            retry: fast_policy(1),
            ..Settings::default()
        };
        let coordinator = Coordinator::from_settings(
            &settings,
            Arc::new(MemoryCredentialStore::with_credential(TEST_KEY)),
        );

        let settlement = coordinator.submit("title-generator", "anything").await.unwrap();
        assert!(settlement.is_ok());
    }
}
