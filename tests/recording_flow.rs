use std::sync::Arc;
use step_recorder::export::{self, build_prompt, ChatCompletionRequest, PromptKind};
use step_recorder::recording::{ChannelSink, MemorySink};
use step_recorder::testing::TestHelper;
use step_recorder::{
    Config, DomEvent, EventKind, ExportFormat, PageSnapshot, RecorderError, RecordingSession,
};

async fn record_login(session: &mut RecordingSession) {
    let page = PageSnapshot::parse(TestHelper::login_page());

    session.start().unwrap();
    for (i, typed) in ["a", "ad", "ada@example.com"].into_iter().enumerate() {
        let email = page.capture("#email").unwrap();
        session
            .record(
                DomEvent::new(EventKind::Input, email)
                    .with_value(typed)
                    .at(100 + i as i64),
            )
            .await
            .unwrap();
    }
    let remember = page.capture("input[name=remember]").unwrap();
    session
        .record(DomEvent::new(EventKind::Change, remember).at(200))
        .await
        .unwrap();
    let submit = page.capture("button").unwrap();
    session
        .record(DomEvent::new(EventKind::Click, submit).at(300))
        .await
        .unwrap();
}

#[tokio::test]
async fn recording_streams_steps_over_channel() {
    let (sink, mut receiver) = ChannelSink::channel();
    let mut session = RecordingSession::new(Config::default().capture, Arc::new(sink));

    record_login(&mut session).await;
    let steps = session.stop().await.unwrap();
    drop(session);

    let mut delivered = Vec::new();
    while let Some(step) = receiver.recv().await {
        delivered.push(step);
    }

    assert_eq!(steps.len(), 3);
    assert_eq!(delivered.len(), 5);
    assert_eq!(delivered.last(), steps.last());

    assert_eq!(steps[0].event, EventKind::Input);
    assert_eq!(steps[0].value.as_deref(), Some("ada@example.com"));
    assert_eq!(steps[0].timestamp, 102);
    assert_eq!(steps[1].locators.css, "input[name=\"remember\"]");
    assert_eq!(steps[2].index, 3);
    assert_eq!(steps[2].text.as_deref(), Some("Sign in"));
    assert_eq!(steps[2].locators.playwright, "page.getByTestId('login-submit')");
}

#[tokio::test]
async fn stopped_session_rejects_events() {
    let sink = Arc::new(MemorySink::new());
    let mut session = RecordingSession::new(Config::default().capture, sink.clone());
    record_login(&mut session).await;
    session.stop().await.unwrap();

    let late = DomEvent::new(EventKind::Click, step_recorder::ElementDescriptor::new("button"));
    assert!(matches!(
        session.record(late).await,
        Err(RecorderError::NotRecording)
    ));
    assert_eq!(sink.steps().await.len(), 5);
}

#[tokio::test]
async fn recorded_steps_export_to_every_format() {
    let mut config = Config::default();
    config.script.base_url = Some("https://example.com/login".to_string());
    let mut session = RecordingSession::new(config.capture.clone(), Arc::new(MemorySink::new()));
    record_login(&mut session).await;
    let steps = session.stop().await.unwrap();

    let csv = export::export(&steps, ExportFormat::Csv, &config).unwrap();
    assert_eq!(csv.lines().count(), 4);

    let txt = export::export(&steps, ExportFormat::Txt, &config).unwrap();
    assert!(txt.contains("1. Type \"ada@example.com\" into input"));
    assert!(txt.contains("3. Click button \"Sign in\""));

    let script = export::export(&steps, ExportFormat::Script, &config).unwrap();
    assert!(script.contains("await page.goto('https://example.com/login');"));
    assert!(script
        .contains("await page.getByRole('textbox', { name: 'Email' }).fill('ada@example.com');"));
    assert!(script.contains("await page.getByRole('checkbox', { name: 'Remember me' }).check();"));
    assert!(script.contains("await page.getByTestId('login-submit').click();"));

    let request = ChatCompletionRequest::new(
        &config.prompt,
        build_prompt(PromptKind::ManualTestCases, &steps),
    );
    assert!(request.messages[1].content.contains("css: #email"));
}

#[tokio::test]
async fn checkbox_with_value_is_checked_in_script() {
    let page = PageSnapshot::parse(
        r#"<form><label><input type="checkbox" name="terms" value="yes"> Accept</label></form>"#,
    );
    let config = Config::default();
    let mut session = RecordingSession::new(config.capture.clone(), Arc::new(MemorySink::new()));
    session.start().unwrap();

    let terms = page.capture("input[name=terms]").unwrap();
    let step = session
        .record(DomEvent::new(EventKind::Change, terms))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(step.value.as_deref(), Some("yes"));
    assert_eq!(step.input_type.as_deref(), Some("checkbox"));

    let steps = session.stop().await.unwrap();
    let script = export::export(&steps, ExportFormat::Script, &config).unwrap();
    assert!(script.contains("await page.getByRole('checkbox', { name: 'Accept' }).check();"));
    assert!(!script.contains(".fill("));
}
