use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nested address value object of a warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlamatGudang {
    pub alamat: String,
    pub kota: String,
    pub provinsi: String,
    #[serde(rename = "kodePos")]
    pub kode_pos: String,
}

/// In-progress warehouse creation draft. Lives only in transient UI state;
/// doubles as the POST body for the create endpoint.
///
/// `kapasitas` stays the raw input string: validation checks that it parses
/// as a number, but the backend receives exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GudangDraft {
    pub nama: String,
    pub deskripsi: String,
    pub kapasitas: String,
    #[serde(rename = "kepalaGudangId")]
    pub kepala_gudang_id: String,
    #[serde(rename = "alamatGudang")]
    pub alamat_gudang: AlamatGudang,
}

impl GudangDraft {
    /// True when the user has typed anything at all. Drives the data-loss
    /// warning on the discard confirmation.
    pub fn is_dirty(&self) -> bool {
        *self != GudangDraft::default()
    }
}

/// Warehouse record as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gudang {
    pub id: i64,
    pub nama: String,
    pub deskripsi: Option<String>,
    pub kapasitas: i64,
    #[serde(rename = "kepalaGudang")]
    pub kepala_gudang: Option<String>,
    #[serde(rename = "alamatGudang")]
    pub alamat_gudang: AlamatGudang,
}

/// Closed enumeration of the draft fields that carry validation rules.
/// Error maps are keyed by this instead of dotted string paths, so a typo
/// in a field key is a compile error rather than a silently ignored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GudangField {
    Nama,
    Kapasitas,
    Alamat,
    Kota,
    Provinsi,
    KodePos,
}

impl GudangField {
    /// DOM id of the input bound to this field; used to scroll the first
    /// violated field into view.
    pub fn input_id(&self) -> &'static str {
        match self {
            GudangField::Nama => "nama",
            GudangField::Kapasitas => "kapasitas",
            GudangField::Alamat => "alamat",
            GudangField::Kota => "kota",
            GudangField::Provinsi => "provinsi",
            GudangField::KodePos => "kodePos",
        }
    }
}

/// Field-keyed validation messages; empty map means the draft is submittable.
pub type ValidationErrors = BTreeMap<GudangField, String>;

/// Validate a creation draft, collecting every violated rule in one pass so
/// the form can show all messages at once. Never short-circuits.
///
/// The supervisor selection is optional and carries no rule.
pub fn validate_draft(draft: &GudangDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.nama.trim().is_empty() {
        errors.insert(GudangField::Nama, "Nama gudang harus diisi".to_string());
    }

    let kapasitas = draft.kapasitas.trim();
    if kapasitas.is_empty() {
        errors.insert(
            GudangField::Kapasitas,
            "Kapasitas gudang harus diisi".to_string(),
        );
    } else if kapasitas.parse::<f64>().is_err() {
        errors.insert(
            GudangField::Kapasitas,
            "Kapasitas harus berupa angka".to_string(),
        );
    }

    let alamat = &draft.alamat_gudang;
    if alamat.alamat.trim().is_empty() {
        errors.insert(GudangField::Alamat, "Alamat harus diisi".to_string());
    }
    if alamat.kota.trim().is_empty() {
        errors.insert(GudangField::Kota, "Kota harus diisi".to_string());
    }
    if alamat.provinsi.trim().is_empty() {
        errors.insert(GudangField::Provinsi, "Provinsi harus diisi".to_string());
    }

    // Only the emptiness check trims; the digit rule applies to the raw
    // value, so padded input like " 40123" is rejected rather than posted.
    if alamat.kode_pos.trim().is_empty() {
        errors.insert(GudangField::KodePos, "Kode pos harus diisi".to_string());
    } else if !alamat.kode_pos.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(
            GudangField::KodePos,
            "Kode pos harus berupa angka".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn valid_draft_has_no_errors() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_collects_every_required_field() {
        let errors = validate_draft(&GudangDraft::default());
        let fields: Vec<GudangField> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                GudangField::Nama,
                GudangField::Kapasitas,
                GudangField::Alamat,
                GudangField::Kota,
                GudangField::Provinsi,
                GudangField::KodePos,
            ]
        );
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut draft = valid_draft();
        draft.nama = "   ".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&GudangField::Nama));
    }

    #[test]
    fn non_numeric_capacity_is_flagged_regardless_of_other_fields() {
        let mut draft = GudangDraft::default();
        draft.kapasitas = "abc".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(
            errors.get(&GudangField::Kapasitas).map(String::as_str),
            Some("Kapasitas harus berupa angka")
        );

        let mut draft = valid_draft();
        draft.kapasitas = "abc".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&GudangField::Kapasitas));
    }

    #[test]
    fn postal_code_must_be_all_digits() {
        let mut draft = valid_draft();
        draft.alamat_gudang.kode_pos = "12a45".to_string();
        assert!(validate_draft(&draft).contains_key(&GudangField::KodePos));

        draft.alamat_gudang.kode_pos = "12345".to_string();
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn postal_code_with_surrounding_whitespace_is_rejected() {
        let mut draft = valid_draft();
        draft.alamat_gudang.kode_pos = " 40123".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(
            errors.get(&GudangField::KodePos).map(String::as_str),
            Some("Kode pos harus berupa angka")
        );

        draft.alamat_gudang.kode_pos = "40123 ".to_string();
        assert!(validate_draft(&draft).contains_key(&GudangField::KodePos));
    }

    #[test]
    fn missing_fields_report_exactly_the_violated_rules() {
        let mut draft = valid_draft();
        draft.alamat_gudang.kota = String::new();
        draft.alamat_gudang.provinsi = " ".to_string();
        let errors = validate_draft(&draft);
        let fields: Vec<GudangField> = errors.keys().copied().collect();
        assert_eq!(fields, vec![GudangField::Kota, GudangField::Provinsi]);
    }

    #[test]
    fn draft_serializes_with_backend_field_names() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(json["nama"], "Gudang A");
        assert_eq!(json["kepalaGudangId"], "");
        assert_eq!(json["alamatGudang"]["kodePos"], "40123");
    }

    #[test]
    fn dirty_tracks_nested_address_edits() {
        let mut draft = GudangDraft::default();
        assert!(!draft.is_dirty());
        draft.alamat_gudang.kota = "Bandung".to_string();
        assert!(draft.is_dirty());
    }
}
