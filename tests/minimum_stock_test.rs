//! Tests for editing an article's minimum stock

mod common;

use common::{articles, FakeInventory};
use inventario::adapters::notify::{NoticeIcon, RecordingNotifier};
use inventario::core::stock::{
    MinimumStockEditor, SaveOutcome, EMPTY_VALUE_TEXT, INVALID_VALUE_TEXT, LOAD_FAILED_TEXT,
    NO_RESPONSE_TEXT, SAVED_TEXT, SERVER_FALLBACK_TEXT,
};
use inventario::domain::{ApiError, ArticleId};
use test_case::test_case;

async fn opened(api: &FakeInventory, notifier: &RecordingNotifier) -> MinimumStockEditor {
    let mut editor = MinimumStockEditor::default();
    assert!(editor.open(api, notifier).await);
    editor
}

#[test_case("" , EMPTY_VALUE_TEXT ; "empty")]
#[test_case("-4", INVALID_VALUE_TEXT ; "negative")]
#[test_case("abc", INVALID_VALUE_TEXT ; "not numeric")]
#[tokio::test]
async fn test_invalid_values_never_reach_the_server(value: &str, message: &str) {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;

    editor.begin_edit(ArticleId::new(1));
    editor.set_value(value);

    assert_eq!(editor.save(&api, &notifier).await, SaveOutcome::Invalid);
    assert_eq!(api.update_count(), 0);
    assert_eq!(editor.articles()[0].stock_minimo, 5);
    assert!(editor.editing().is_some());

    let notice = notifier.last().unwrap();
    assert_eq!(notice.icon, NoticeIcon::Error);
    assert_eq!(notice.text, message);
}

#[tokio::test]
async fn test_check_rejects_before_any_confirmation() {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;

    assert_eq!(editor.check(&notifier), None);
    assert!(notifier.notices().is_empty());

    editor.begin_edit(ArticleId::new(1));
    editor.set_value("abc");
    assert_eq!(editor.check(&notifier), None);
    assert_eq!(notifier.last().unwrap().text, INVALID_VALUE_TEXT);
    assert_eq!(api.update_count(), 0);

    editor.set_value(" 7 ");
    assert_eq!(editor.check(&notifier), Some(7));
    assert_eq!(api.update_count(), 0);
    assert!(editor.editing().is_some());
}

#[tokio::test]
async fn test_successful_save_updates_local_list() {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;

    editor.begin_edit(ArticleId::new(1));
    editor.set_value("8");

    assert_eq!(
        editor.save(&api, &notifier).await,
        SaveOutcome::Saved {
            id: ArticleId::new(1),
            stock_minimo: 8
        }
    );
    assert_eq!(api.update_count(), 1);
    assert_eq!(editor.articles()[0].stock_minimo, 8);
    assert!(editor.editing().is_none());

    let notice = notifier.last().unwrap();
    assert_eq!(notice.icon, NoticeIcon::Success);
    assert_eq!(notice.text, SAVED_TEXT);
}

#[tokio::test]
async fn test_server_failures_keep_local_list() {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;
    editor.begin_edit(ArticleId::new(2));
    editor.set_value("1");

    api.fail_with(ApiError::Server {
        status: 400,
        message: Some("Stock mínimo inválido para este artículo".into()),
    });
    assert_eq!(editor.save(&api, &notifier).await, SaveOutcome::Failed);
    assert_eq!(
        notifier.last().unwrap().text,
        "Stock mínimo inválido para este artículo"
    );

    api.fail_with(ApiError::Server {
        status: 500,
        message: None,
    });
    editor.save(&api, &notifier).await;
    assert_eq!(notifier.last().unwrap().text, SERVER_FALLBACK_TEXT);

    api.fail_with(ApiError::NoResponse("timeout".into()));
    editor.save(&api, &notifier).await;
    assert_eq!(notifier.last().unwrap().text, NO_RESPONSE_TEXT);

    assert_eq!(editor.articles()[1].stock_minimo, 3);
    assert!(editor.editing().is_some());
}

#[tokio::test]
async fn test_open_resets_search_and_edit() {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;
    editor.set_search("pala");
    editor.begin_edit(ArticleId::new(2));

    assert!(editor.open(&api, &notifier).await);
    assert_eq!(editor.search(), "");
    assert!(editor.editing().is_none());
    assert_eq!(editor.visible().len(), 2);
}

#[tokio::test]
async fn test_failed_open_notifies() {
    let api = FakeInventory::new(articles(), Vec::new());
    api.fail_with(ApiError::NoResponse("refused".into()));
    let notifier = RecordingNotifier::new();
    let mut editor = MinimumStockEditor::default();

    assert!(!editor.open(&api, &notifier).await);
    assert!(editor.articles().is_empty());
    assert_eq!(notifier.last().unwrap().text, LOAD_FAILED_TEXT);

    api.recover();
    assert!(editor.open(&api, &notifier).await);
    assert_eq!(editor.articles().len(), 2);
}

#[tokio::test]
async fn test_save_without_edit() {
    let api = FakeInventory::new(articles(), Vec::new());
    let notifier = RecordingNotifier::new();
    let mut editor = opened(&api, &notifier).await;
    assert_eq!(editor.save(&api, &notifier).await, SaveOutcome::NoEdit);
    assert!(notifier.notices().is_empty());
}
