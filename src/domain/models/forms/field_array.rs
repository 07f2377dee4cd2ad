//! # 필드 배열 (안정적인 항목 식별자)
//!
//! 동적으로 추가/삭제되는 폼 항목을 보관하는 아레나 형태의 저장소입니다.
//! 항목마다 생성 시점에 [`FieldId`]를 발급하고, 순서는 식별자 목록으로 따로
//! 관리합니다. 인덱스가 아닌 식별자로 항목을 가리키므로, 중간 항목을 삭제해도
//! 다른 항목의 상태가 옆 항목으로 "밀려나지" 않습니다.
//!
//! ```text
//! entries: { id-a → Rust, id-b → Go, id-c → SQL }
//! order:   [ id-a, id-b, id-c ]
//!
//! remove(id-b)
//!
//! entries: { id-a → Rust, id-c → SQL }
//! order:   [ id-a, id-c ]          ← id-a, id-c 는 그대로
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 필드 배열 항목의 식별자 (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for FieldId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// 순서와 식별자를 함께 관리하는 항목 목록
#[derive(Debug, Clone)]
pub struct FieldArray<T> {
    entries: HashMap<FieldId, T>,
    order: Vec<FieldId>,
}

impl<T> Default for FieldArray<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> FieldArray<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목을 맨 뒤에 추가하고 새 식별자를 반환합니다
    pub fn append(&mut self, entry: T) -> FieldId {
        let id = FieldId::new();
        self.entries.insert(id, entry);
        self.order.push(id);
        id
    }

    /// 식별자에 해당하는 항목을 제거합니다
    ///
    /// 다른 항목의 식별자는 바뀌지 않습니다. 없는 식별자면 `None`.
    pub fn remove(&mut self, id: FieldId) -> Option<T> {
        let entry = self.entries.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(entry)
    }

    pub fn get(&self, id: FieldId) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    /// 현재 순서상의 위치
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.order.iter().position(|existing| *existing == id)
    }

    /// 위치로 식별자를 찾습니다 (`techs.<index>.title` 같은 인덱스 주소 지정용)
    pub fn id_at(&self, index: usize) -> Option<FieldId> {
        self.order.get(index).copied()
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.id_at(index)?;
        self.entries.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> &[FieldId] {
        &self.order
    }

    /// 순서대로 `(식별자, 항목)`을 순회합니다
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.entries.get(id).map(|entry| (*id, entry)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> (FieldArray<&'static str>, Vec<FieldId>) {
        let mut array = FieldArray::new();
        let ids = vec![array.append("Rust"), array.append("Go"), array.append("SQL")];
        (array, ids)
    }

    #[test]
    fn test_append_returns_distinct_ids_in_order() {
        let (array, ids) = filled();

        assert_eq!(array.len(), 3);
        assert_eq!(array.ids(), ids.as_slice());
        assert_ne!(ids[0], ids[1]);
        assert_eq!(array.values().copied().collect::<Vec<_>>(), vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_remove_from_middle_keeps_other_identities_and_values() {
        let (mut array, ids) = filled();

        assert_eq!(array.remove(ids[1]), Some("Go"));

        assert_eq!(array.len(), 2);
        assert_eq!(array.ids(), &[ids[0], ids[2]]);
        assert_eq!(array.get(ids[0]), Some(&"Rust"));
        assert_eq!(array.get(ids[2]), Some(&"SQL"));
        assert_eq!(array.position(ids[2]), Some(1));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut array, _) = filled();

        assert_eq!(array.remove(FieldId::new()), None);
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_index_addressing_follows_current_order() {
        let (mut array, ids) = filled();
        array.remove(ids[0]);

        assert_eq!(array.id_at(0), Some(ids[1]));
        *array.get_at_mut(1).unwrap() = "PostgreSQL";

        assert_eq!(array.get(ids[2]), Some(&"PostgreSQL"));
        assert_eq!(array.get_at_mut(2), None);
    }

    #[test]
    fn test_field_id_roundtrips_through_text() {
        let id = FieldId::new();
        let parsed: FieldId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<FieldId>().is_err());
    }
}
