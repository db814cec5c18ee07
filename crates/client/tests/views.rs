//! View state driven against a live server on a local port.

mod common;

use assert_matches::assert_matches;
use censur_client::resource::{CensorDraft, Censorer, OrganisationDraft, Organisationer, Sprogcentre};
use censur_client::shell::ActiveView;
use censur_client::{ClientError, HoldView, ListView, Shell, Tab};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn organisation_view_submit_resets_form_and_refetches(pool: PgPool) {
    let api = common::serve(pool).await;
    let mut view = ListView::<Organisationer>::new();
    view.mount(&api).await;
    assert!(view.items.is_empty());
    assert!(!view.loading);

    view.toggle_form();
    view.form = OrganisationDraft { navn: " Acme ".into() };
    assert!(view.submit(&api).await);

    assert_eq!(view.form, OrganisationDraft::default());
    assert!(!view.form_visible);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].navn, "Acme");
    assert!(view.error.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_form_is_not_posted(pool: PgPool) {
    let api = common::serve(pool).await;
    let mut view = ListView::<Censorer>::new();
    view.form = CensorDraft {
        fornavn: "Karen".into(),
        ..Default::default()
    };

    assert!(!view.submit(&api).await);
    assert!(view.error.is_some());
    assert_eq!(view.form.fornavn, "Karen");

    view.refresh(&api).await;
    assert!(view.items.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_delete_keeps_items_and_shows_error(pool: PgPool) {
    let api = common::serve(pool).await;
    let mut view = ListView::<Censorer>::new();
    view.form = CensorDraft {
        fornavn: "Ib".into(),
        efternavn: "Spang".into(),
        ..Default::default()
    };
    assert!(view.submit(&api).await);
    assert_eq!(view.items.len(), 1);
    assert!(!view.items[0].is_archived());

    assert!(!view.remove(&api, 999_999).await);
    assert_eq!(view.items.len(), 1);
    let error = view.error.clone().unwrap();
    assert!(error.contains("Censor with id 999999 not found"), "{error}");

    let id = view.items[0].censor.id;
    assert!(view.remove(&api, id).await);
    assert!(view.items.is_empty());
    assert!(view.error.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn api_errors_carry_server_message(pool: PgPool) {
    let api = common::serve(pool).await;

    let err = api.delete::<Sprogcentre>(42).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, ref message } if message == "Sprogcenter with id 42 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hold_view_lists_only_after_term_selection(pool: PgPool) {
    let api = common::serve(pool).await;

    let mut centres = ListView::<Sprogcentre>::new();
    centres.form.navn = "Studieskolen".into();
    assert!(centres.submit(&api).await);
    let centre_id = centres.items[0].id;

    let mut view = HoldView::new();
    view.mount(&api).await;
    assert!(view.term_options.is_empty());
    assert_eq!(view.sprogcenter_options.len(), 1);
    assert!(view.hold.is_empty());

    view.select_termin(&api, "Sommer 2025").await;
    assert!(view.open_add_dialog());
    view.form.deltagere = "12".into();
    view.form.prove = "PD3".into();
    view.form.provetype = "Mundtlig".into();
    view.form.sprogcenter_id = Some(centre_id);
    assert!(view.confirm_add(&api).await);

    assert!(!view.dialog_open);
    assert_eq!(view.hold.len(), 1);
    assert_eq!(view.hold[0].termin, "Sommer 2025");
    assert_eq!(view.hold[0].sprogcenter.as_ref().unwrap().navn, "Studieskolen");

    // Another term does not see it.
    view.select_termin(&api, "Vinter 2024").await;
    assert!(view.hold.is_empty());

    view.select_termin(&api, "").await;
    assert!(view.selected_termin.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hold_view_toggle_and_remove(pool: PgPool) {
    let api = common::serve(pool).await;
    let mut view = HoldView::new();
    view.select_termin(&api, "Sommer 2025").await;
    view.open_add_dialog();
    view.form.deltagere = "3".into();
    view.form.prove = "PD2".into();
    view.form.provetype = "Skriftlig".into();
    assert!(view.confirm_add(&api).await);

    let id = view.hold[0].id;
    assert!(view.toggle_lock(&api, id).await);
    assert!(view.hold[0].laast);
    assert!(view.toggle_lock(&api, id).await);
    assert!(!view.hold[0].laast);

    assert!(view.remove(&api, id).await);
    assert!(view.hold.is_empty());

    assert!(!view.toggle_lock(&api, id).await);
    assert!(view.error.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hold_dialog_keeps_form_on_unknown_reference(pool: PgPool) {
    let api = common::serve(pool).await;
    let mut view = HoldView::new();
    view.select_termin(&api, "Sommer 2025").await;
    view.open_add_dialog();
    view.form.deltagere = "3".into();
    view.form.prove = "PD2".into();
    view.form.provetype = "Skriftlig".into();
    view.form.censorer_id = Some(4242);

    assert!(!view.confirm_add(&api).await);
    assert!(view.dialog_open);
    assert_eq!(view.form.censorer_id, Some(4242));
    let error = view.error.clone().unwrap();
    assert!(error.contains("censorer_id (4242) does not exist"), "{error}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn shell_switch_mounts_the_selected_view(pool: PgPool) {
    let api = common::serve(pool).await;
    api.create::<Organisationer>(&OrganisationDraft { navn: "Kommunen".into() })
        .await
        .unwrap();

    let mut shell = Shell::new(api);
    assert_eq!(shell.active_tab(), Tab::Censorer);

    shell.switch_to(Tab::Organisationer).await;
    assert_eq!(shell.active_tab(), Tab::Organisationer);
    assert!(matches!(&shell.view, ActiveView::Organisationer(view) if view.items.len() == 1));

    shell.switch_to(Tab::Hold).await;
    assert!(matches!(&shell.view, ActiveView::Hold(view) if view.selected_termin.is_none()));
}
