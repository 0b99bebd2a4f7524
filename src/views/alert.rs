//! Inline alerts.

use vitrine_kernel::settings::StoreSettings;

use super::{document, escape, Head};

/// Destructive alert with the failure message appended as details.
pub fn error_alert(title: &str, description: &str, message: &str) -> String {
    let message = if message.is_empty() {
        "Erro desconhecido"
    } else {
        message
    };

    format!(
        r#"<div class="alert destructive" role="alert">
    <span class="alert-icon" aria-hidden="true">&#128640;</span>
    <div>
        <h5 class="alert-title">{}</h5>
        <p class="alert-description">{} Detalhes: {}</p>
    </div>
</div>"#,
        escape(title),
        escape(description),
        escape(message)
    )
}

/// Full page holding only an error alert.
pub fn error_page(store: &StoreSettings, title: &str, description: &str, message: &str) -> String {
    let main = format!(
        r#"<main class="container page">
{}
</main>"#,
        error_alert(title, description, message)
    );
    document(store, &Head::for_store(store), &main)
}
