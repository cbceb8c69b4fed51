use contracts::domain::gudang::{validate_draft, GudangDraft, GudangField, ValidationErrors};
use contracts::system::users::KepalaGudang;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::gudang::api;
use crate::routes::routes::GUDANG_LIST_ROUTE;
use crate::shared::toast::ToastService;

/// How long the success toast stays on screen before redirecting to the
/// warehouse listing.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// What the confirmation dialog is asking about. Carried explicitly in the
/// stage instead of being inferred from whether the name field happens to be
/// empty, so clearing a field mid-edit can never flip the dialog's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    Create,
    Discard,
}

/// Form state machine: Editing -> Confirming -> Submitting.
///
/// Editing is re-entered on validation failure, dialog dismissal, and
/// submission failure (with the draft preserved in all three cases).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    Editing,
    Confirming(ConfirmIntent),
    Submitting,
}

impl FormStage {
    pub fn is_submitting(self) -> bool {
        self == FormStage::Submitting
    }
}

/// ViewModel for the warehouse creation form. DOM-free: navigation and
/// scroll-to-error are requested through signals the view reacts to.
#[derive(Clone, Copy)]
pub struct AddGudangViewModel {
    pub draft: RwSignal<GudangDraft>,
    pub errors: RwSignal<ValidationErrors>,
    pub stage: RwSignal<FormStage>,
    pub kepala_gudang: RwSignal<Vec<KepalaGudang>>,
    /// Set to the first violated field after a failed submit; the view
    /// scrolls it into view and clears the request.
    pub focus_request: RwSignal<Option<GudangField>>,
    /// Set when the form wants to leave; the view performs the navigation.
    pub redirect: RwSignal<Option<&'static str>>,
}

impl AddGudangViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(GudangDraft::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            stage: RwSignal::new(FormStage::Editing),
            kepala_gudang: RwSignal::new(Vec::new()),
            focus_request: RwSignal::new(None),
            redirect: RwSignal::new(None),
        }
    }

    /// Fetch the supervisor reference list. Failure is non-fatal: the
    /// selector stays empty and the field remains optional.
    pub fn load_kepala_gudang(&self, token: String, toasts: ToastService) {
        let kepala_gudang = self.kepala_gudang;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_kepala_gudang(&token).await {
                Ok(list) => kepala_gudang.set(list),
                Err(e) => {
                    log::error!("Error fetching kepala gudang list: {}", e);
                    toasts.error("Gagal memuat daftar kepala gudang");
                }
            }
        });
    }

    pub fn error_for(&self, field: GudangField) -> Option<String> {
        self.errors.with(|errors| errors.get(&field).cloned())
    }

    /// Editing a field clears only that field's message.
    pub fn clear_error(&self, field: GudangField) {
        self.errors.update(|errors| {
            errors.remove(&field);
        });
    }

    /// Submit action: validate and either enter the create confirmation or
    /// stay in Editing with every violated rule surfaced at once.
    pub fn request_submit(&self, toasts: ToastService) {
        if self.stage.get_untracked() != FormStage::Editing {
            return;
        }

        let errors = validate_draft(&self.draft.get_untracked());
        if errors.is_empty() {
            self.errors.set(ValidationErrors::new());
            self.stage.set(FormStage::Confirming(ConfirmIntent::Create));
        } else {
            let first = errors.keys().next().copied();
            self.errors.set(errors);
            self.focus_request.set(first);
            toasts.error("Mohon perbaiki kesalahan pada formulir");
        }
    }

    /// Cancel action: ask for confirmation before discarding the draft.
    pub fn request_cancel(&self) {
        if self.stage.get_untracked() == FormStage::Editing {
            self.stage.set(FormStage::Confirming(ConfirmIntent::Discard));
        }
    }

    /// Close the dialog without acting; the draft is untouched.
    pub fn dismiss_confirmation(&self) {
        if matches!(self.stage.get_untracked(), FormStage::Confirming(_)) {
            self.stage.set(FormStage::Editing);
        }
    }

    /// Acknowledge the confirmation dialog.
    pub fn confirm(&self, token: String, toasts: ToastService) {
        match self.stage.get_untracked() {
            FormStage::Confirming(ConfirmIntent::Discard) => {
                self.redirect.set(Some(GUDANG_LIST_ROUTE));
            }
            FormStage::Confirming(ConfirmIntent::Create) => {
                self.stage.set(FormStage::Submitting);
                let draft = self.draft.get_untracked();
                let stage = self.stage;
                let redirect = self.redirect;
                wasm_bindgen_futures::spawn_local(async move {
                    match api::create(&token, &draft).await {
                        Ok(()) => {
                            toasts.success("Gudang berhasil ditambahkan!");
                            TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                            redirect.set(Some(GUDANG_LIST_ROUTE));
                        }
                        Err(e) => {
                            log::error!("Error adding gudang: {}", e);
                            toasts.error(e);
                            stage.set(FormStage::Editing);
                        }
                    }
                });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::gudang::AlamatGudang;

    fn valid_draft() -> GudangDraft {
        GudangDraft {
            nama: "Gudang A".to_string(),
            deskripsi: String::new(),
            kapasitas: "500".to_string(),
            kepala_gudang_id: String::new(),
            alamat_gudang: AlamatGudang {
                alamat: "Jl. Merdeka No. 1".to_string(),
                kota: "Bandung".to_string(),
                provinsi: "Jawa Barat".to_string(),
                kode_pos: "40123".to_string(),
            },
        }
    }

    #[test]
    fn valid_submit_enters_create_confirmation_with_draft_unchanged() {
        let vm = AddGudangViewModel::new();
        let draft = valid_draft();
        vm.draft.set(draft.clone());

        vm.request_submit(ToastService::new());

        assert_eq!(
            vm.stage.get_untracked(),
            FormStage::Confirming(ConfirmIntent::Create)
        );
        assert_eq!(vm.draft.get_untracked(), draft);
        assert!(vm.errors.get_untracked().is_empty());
    }

    #[test]
    fn invalid_submit_stays_editing_and_requests_focus_on_first_error() {
        let vm = AddGudangViewModel::new();
        let mut draft = valid_draft();
        draft.nama = String::new();
        draft.kapasitas = "abc".to_string();
        vm.draft.set(draft);

        vm.request_submit(ToastService::new());

        assert_eq!(vm.stage.get_untracked(), FormStage::Editing);
        let errors = vm.errors.get_untracked();
        assert!(errors.contains_key(&GudangField::Nama));
        assert!(errors.contains_key(&GudangField::Kapasitas));
        assert_eq!(vm.focus_request.get_untracked(), Some(GudangField::Nama));
    }

    #[test]
    fn cancel_carries_explicit_discard_intent_even_with_empty_name() {
        let vm = AddGudangViewModel::new();
        vm.request_cancel();
        assert_eq!(
            vm.stage.get_untracked(),
            FormStage::Confirming(ConfirmIntent::Discard)
        );
    }

    #[test]
    fn dismissing_confirmation_returns_to_editing_with_draft_preserved() {
        let vm = AddGudangViewModel::new();
        let draft = valid_draft();
        vm.draft.set(draft.clone());
        vm.request_submit(ToastService::new());
        vm.dismiss_confirmation();

        assert_eq!(vm.stage.get_untracked(), FormStage::Editing);
        assert_eq!(vm.draft.get_untracked(), draft);
    }

    #[test]
    fn confirming_discard_requests_listing_redirect() {
        let vm = AddGudangViewModel::new();
        vm.request_cancel();
        vm.confirm(String::new(), ToastService::new());
        assert_eq!(vm.redirect.get_untracked(), Some(GUDANG_LIST_ROUTE));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let vm = AddGudangViewModel::new();
        vm.request_submit(ToastService::new());
        assert!(!vm.errors.get_untracked().is_empty());

        vm.clear_error(GudangField::Nama);
        let errors = vm.errors.get_untracked();
        assert!(!errors.contains_key(&GudangField::Nama));
        assert!(errors.contains_key(&GudangField::Kapasitas));
    }
}
