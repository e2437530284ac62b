//! Reference data used to populate selection inputs.
//!
//! Every table is a `&'static` slice: the same slice is returned on every
//! call and the declaration order is the display order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of legal document attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegalDocumentKind {
    pub id: u32,
    pub name: &'static str,
}

/// Moderation state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatusId {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatusId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Parses the wire form (`PENDING`, `APPROVED`, `REJECTED`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalStatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovalStatus {
    pub id: ApprovalStatusId,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyType {
    pub id: &'static str,
    pub name: &'static str,
}

pub static LEGAL_DOCUMENT_KINDS: &[LegalDocumentKind] = &[
    LegalDocumentKind { id: 1, name: "Sổ đỏ" },
    LegalDocumentKind { id: 2, name: "Sổ hồng" },
    LegalDocumentKind { id: 3, name: "Hợp đồng mua bán" },
    LegalDocumentKind { id: 4, name: "Giấy tờ viết tay" },
    LegalDocumentKind { id: 5, name: "Đang chờ sổ" },
];

pub static APPROVAL_STATUSES: &[ApprovalStatus] = &[
    ApprovalStatus {
        id: ApprovalStatusId::Pending,
        name: "Chờ duyệt",
    },
    ApprovalStatus {
        id: ApprovalStatusId::Approved,
        name: "Đã duyệt",
    },
    ApprovalStatus {
        id: ApprovalStatusId::Rejected,
        name: "Từ chối",
    },
];

pub static PROPERTY_TYPES: &[PropertyType] = &[
    PropertyType { id: "nha", name: "Nhà riêng" },
    PropertyType { id: "canho", name: "Căn hộ" },
    PropertyType { id: "bietthu", name: "Biệt thự" },
    PropertyType { id: "matbang", name: "Mặt bằng" },
];

#[inline]
pub fn legal_document_kinds() -> &'static [LegalDocumentKind] {
    LEGAL_DOCUMENT_KINDS
}

#[inline]
pub fn approval_statuses() -> &'static [ApprovalStatus] {
    APPROVAL_STATUSES
}

#[inline]
pub fn property_types() -> &'static [PropertyType] {
    PROPERTY_TYPES
}

pub fn find_legal_document_kind(id: u32) -> Option<&'static LegalDocumentKind> {
    LEGAL_DOCUMENT_KINDS.iter().find(|kind| kind.id == id)
}

pub fn find_property_type(id: &str) -> Option<&'static PropertyType> {
    PROPERTY_TYPES.iter().find(|kind| kind.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn property_types_are_fixed() {
        for _ in 0..3 {
            let ids: Vec<_> = property_types().iter().map(|t| t.id).collect();
            assert_eq!(ids, ["nha", "canho", "bietthu", "matbang"]);
        }
    }

    #[test]
    fn accessors_return_the_same_slice() {
        assert!(std::ptr::eq(property_types(), property_types()));
        assert!(std::ptr::eq(legal_document_kinds(), LEGAL_DOCUMENT_KINDS));
        assert!(std::ptr::eq(approval_statuses(), approval_statuses()));
    }

    #[test]
    fn ids_are_unique() {
        let legal: HashSet<_> = LEGAL_DOCUMENT_KINDS.iter().map(|k| k.id).collect();
        assert_eq!(legal.len(), LEGAL_DOCUMENT_KINDS.len());

        let statuses: HashSet<_> = APPROVAL_STATUSES.iter().map(|s| s.id).collect();
        assert_eq!(statuses.len(), APPROVAL_STATUSES.len());

        let types: HashSet<_> = PROPERTY_TYPES.iter().map(|t| t.id).collect();
        assert_eq!(types.len(), PROPERTY_TYPES.len());
    }

    #[test]
    fn approval_statuses_cover_the_wire_values() {
        let ids: Vec<_> = APPROVAL_STATUSES.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["PENDING", "APPROVED", "REJECTED"]);
        assert_eq!(ApprovalStatusId::parse("APPROVED"), Some(ApprovalStatusId::Approved));
        assert_eq!(ApprovalStatusId::parse("approved"), None);
    }

    #[test]
    fn approval_status_serializes_as_upper_case() {
        let json = serde_json::to_string(&ApprovalStatusId::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
    }

    #[test]
    fn lookups_do_not_reorder() {
        assert_eq!(find_property_type("bietthu").map(|t| t.name), Some("Biệt thự"));
        assert_eq!(find_legal_document_kind(2).map(|k| k.name), Some("Sổ hồng"));
        assert!(find_legal_document_kind(99).is_none());
        assert_eq!(APPROVAL_STATUSES[0].name, "Chờ duyệt");
        assert_eq!(PROPERTY_TYPES[0].id, "nha");
    }
}
