use contracts::domain::gudang::GudangField;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::view_model::{AddGudangViewModel, ConfirmIntent, FormStage};
use crate::layout::navbar::Navbar;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::toast::use_toasts;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

#[component]
pub fn AddGudangPage() -> impl IntoView {
    view! {
        <RequireSession>
            <AddGudangForm />
        </RequireSession>
    }
}

/// Smooth-scroll the input bound to a violated field into the viewport.
fn scroll_to_field(field: GudangField) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(field.input_id()) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
fn AddGudangForm() -> impl IntoView {
    let vm = AddGudangViewModel::new();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    // Supervisor reference list; fetched once, failure leaves it empty.
    Effect::new(move || {
        if let Some(token) = session.get_untracked().token {
            vm.load_kepala_gudang(token, toasts);
        }
    });

    // The view model requests navigation and scroll through signals.
    Effect::new(move || {
        if let Some(path) = vm.redirect.get() {
            navigate(path, NavigateOptions::default());
        }
    });
    Effect::new(move || {
        if let Some(field) = vm.focus_request.get() {
            scroll_to_field(field);
            vm.focus_request.set(None);
        }
    });

    let submitting = Signal::derive(move || vm.stage.get().is_submitting());

    let supervisor_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Pilih Kepala Gudang".to_string())];
        options.extend(
            vm.kepala_gudang
                .get()
                .into_iter()
                .map(|kg| (kg.id, kg.name)),
        );
        options
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.request_submit(toasts);
    };

    view! {
        <div class="page-container">
            <Navbar title="Tambah Gudang Baru" />

            <div class="form-container">
                <form on:submit=on_submit>
                    <div class="form-section">
                        <h3>"Informasi Umum"</h3>

                        <Input
                            id="nama"
                            label="Nama Gudang"
                            required=true
                            placeholder="Masukkan nama gudang"
                            value=Signal::derive(move || vm.draft.get().nama)
                            on_input=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.nama = value);
                                vm.clear_error(GudangField::Nama);
                            })
                            error=Signal::derive(move || vm.error_for(GudangField::Nama))
                            disabled=submitting
                        />

                        <Textarea
                            id="deskripsi"
                            label="Deskripsi"
                            rows=4
                            placeholder="Deskripsi singkat tentang gudang ini"
                            value=Signal::derive(move || vm.draft.get().deskripsi)
                            on_input=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.deskripsi = value);
                            })
                            disabled=submitting
                        />

                        <Input
                            id="kapasitas"
                            label="Kapasitas"
                            required=true
                            placeholder="Contoh: 500"
                            value=Signal::derive(move || vm.draft.get().kapasitas)
                            on_input=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.kapasitas = value);
                                vm.clear_error(GudangField::Kapasitas);
                            })
                            error=Signal::derive(move || vm.error_for(GudangField::Kapasitas))
                            disabled=submitting
                        />

                        <Select
                            id="kepalaGudangId"
                            label="Kepala Gudang"
                            value=Signal::derive(move || vm.draft.get().kepala_gudang_id)
                            on_change=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.kepala_gudang_id = value);
                            })
                            options=supervisor_options
                            disabled=submitting
                        />
                    </div>

                    <div class="form-section">
                        <h3>"Lokasi"</h3>

                        <Textarea
                            id="alamat"
                            label="Alamat"
                            required=true
                            rows=3
                            placeholder="Masukkan alamat lengkap gudang"
                            value=Signal::derive(move || vm.draft.get().alamat_gudang.alamat)
                            on_input=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.alamat_gudang.alamat = value);
                                vm.clear_error(GudangField::Alamat);
                            })
                            error=Signal::derive(move || vm.error_for(GudangField::Alamat))
                            disabled=submitting
                        />

                        <div class="form-row">
                            <Input
                                id="kota"
                                label="Kota"
                                required=true
                                placeholder="Nama kota"
                                value=Signal::derive(move || vm.draft.get().alamat_gudang.kota)
                                on_input=Callback::new(move |value: String| {
                                    vm.draft.update(|d| d.alamat_gudang.kota = value);
                                    vm.clear_error(GudangField::Kota);
                                })
                                error=Signal::derive(move || vm.error_for(GudangField::Kota))
                                disabled=submitting
                            />

                            <Input
                                id="provinsi"
                                label="Provinsi"
                                required=true
                                placeholder="Nama provinsi"
                                value=Signal::derive(move || vm.draft.get().alamat_gudang.provinsi)
                                on_input=Callback::new(move |value: String| {
                                    vm.draft.update(|d| d.alamat_gudang.provinsi = value);
                                    vm.clear_error(GudangField::Provinsi);
                                })
                                error=Signal::derive(move || vm.error_for(GudangField::Provinsi))
                                disabled=submitting
                            />
                        </div>

                        <Input
                            id="kodePos"
                            label="Kode Pos"
                            required=true
                            placeholder="Contoh: 12345"
                            value=Signal::derive(move || vm.draft.get().alamat_gudang.kode_pos)
                            on_input=Callback::new(move |value: String| {
                                vm.draft.update(|d| d.alamat_gudang.kode_pos = value);
                                vm.clear_error(GudangField::KodePos);
                            })
                            error=Signal::derive(move || vm.error_for(GudangField::KodePos))
                            disabled=submitting
                        />
                    </div>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| vm.request_cancel()
                            disabled=move || submitting.get()
                        >
                            "Batal"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Menyimpan..." } else { "Simpan" }}
                        </button>
                    </div>
                </form>
            </div>

            <ConfirmationModal vm=vm />
        </div>
    }
}

#[component]
fn ConfirmationModal(vm: AddGudangViewModel) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let on_confirm = move |_| {
        let token = session.get_untracked().token.unwrap_or_default();
        vm.confirm(token, toasts);
    };

    move || match vm.stage.get() {
        FormStage::Editing => ().into_any(),
        FormStage::Submitting => view! {
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h3>"Menyimpan Data"</h3>
                    </div>
                    <div class="modal-body">
                        <div class="loading-indicator">
                            <div class="loading-spinner"></div>
                            <p>"Sedang menyimpan data gudang..."</p>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        FormStage::Confirming(intent) => {
            let nama = vm.draft.with_untracked(|d| d.nama.clone());
            let dirty = vm.draft.with_untracked(|d| d.is_dirty());
            let (title, question, confirm_label, confirm_class) = match intent {
                ConfirmIntent::Create => (
                    nama.clone(),
                    format!("Apakah Anda yakin ingin menambahkan gudang \"{}\"?", nama),
                    "Ya, Tambahkan",
                    "btn btn-primary",
                ),
                ConfirmIntent::Discard => (
                    "Konfirmasi".to_string(),
                    "Apakah Anda yakin ingin membatalkan penambahan gudang?".to_string(),
                    "Ya, Batalkan",
                    "btn btn-danger",
                ),
            };
            view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h3>{title}</h3>
                            <button
                                class="close-button"
                                on:click=move |_| vm.dismiss_confirmation()
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                        <div class="modal-body">
                            <p>{question}</p>
                            {(intent == ConfirmIntent::Discard && dirty).then(|| view! {
                                <p class="warning-text">
                                    "Semua data yang telah dimasukkan akan hilang."
                                </p>
                            })}
                        </div>
                        <div class="modal-footer">
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| vm.dismiss_confirmation()
                            >
                                "Kembali"
                            </button>
                            <button class=confirm_class on:click=on_confirm>
                                {confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
