use crate::shared::now_ms;
use crate::shared::storage::{load_document_requests, stage_document_request};
use chrono::{DateTime, Utc};
use contracts::usecases::u001_request_document::DocumentRequest;
use leptos::prelude::*;
use thaw::*;

/// Результат последней отправки формы
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Staged(usize),
    Rejected(String),
}

/// Запросить полный документ по blueprint: заявка складывается в localStorage
#[component]
pub fn RequestDocument(document_id: String, document_title: String) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Outcome>);
    let already_requested = {
        let id = document_id.clone();
        load_document_requests()
            .iter()
            .filter(|r| r.document_id == id)
            .count()
    };

    let document_id = StoredValue::new(document_id);
    let document_title = StoredValue::new(document_title);

    let submit = move |_| {
        let requested_at =
            DateTime::<Utc>::from_timestamp_millis(now_ms() as i64).unwrap_or_default();
        let request = DocumentRequest::new(
            document_id.get_value(),
            document_title.get_value(),
            email.get_untracked().trim(),
            requested_at,
        );

        let result = request
            .validate()
            .and_then(|_| stage_document_request(request));
        match result {
            Ok(count) => {
                email.set(String::new());
                outcome.set(Some(Outcome::Staged(count)));
            }
            Err(e) => {
                log::warn!("document request rejected: {}", e);
                outcome.set(Some(Outcome::Rejected(e.to_string())));
            }
        }
    };

    view! {
        <div class="request-document catalog-card">
            <h3>"Request full document"</h3>
            {(already_requested > 0).then(|| view! {
                <span>{format!("Requested {} time(s) from this browser", already_requested)}</span>
            })}
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=email placeholder="you@company.com" />
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Request"
                </Button>
            </Flex>
            {move || outcome.get().map(|o| match o {
                Outcome::Staged(count) => view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        {format!("Request saved ({} in this browser)", count)}
                    </MessageBar>
                }.into_any(),
                Outcome::Rejected(message) => view! {
                    <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                }.into_any(),
            })}
        </div>
    }
}
