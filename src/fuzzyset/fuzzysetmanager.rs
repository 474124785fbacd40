use std::cell::{RefCell, RefMut};
use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::fuzzyset::fuzzyset::FuzzySet;
use crate::math::membership::membershiperror::MembershipError;
use crate::math::membership::membershipfunction::MembershipFunction;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error(transparent)]
    MembershipError(#[from] MembershipError),
    #[error("fuzzy set '{0}' not found")]
    NameNotFoundError(String),
}

/// JSON shape of a set definition: a catalogue key plus an ordered
/// parameter list, mirroring how the chart layer stores its state.
#[derive(Deserialize)]
struct FuzzySetJsonProp {
    label: String,
    color: String,
    function: String,
    parameters: Vec<f64>,
}

/// In-memory registry of fuzzy sets keyed by label. The sets themselves
/// stay plain data; evaluation goes through the catalogue on every call.
pub struct FuzzySetManager {
    map_cell: RefCell<HashMap<String, FuzzySet>>,
}

impl FuzzySetManager {
    pub fn new() -> FuzzySetManager {
        FuzzySetManager {
            map_cell: RefCell::new(HashMap::new()),
        }
    }

    pub fn map(&self) -> RefMut<'_, HashMap<String, FuzzySet>> {
        self.map_cell.borrow_mut()
    }

    pub fn insert(&self, set: FuzzySet) {
        self.map().insert(set.label().to_owned(), set);
    }

    pub fn get(&self, label: &str) -> Result<FuzzySet, ManagerError> {
        let map = self.map();
        map.get(label).cloned().map_or(
            Err(ManagerError::NameNotFoundError(label.to_owned())),
            |set| Ok(set),
        )
    }

    pub fn remove(&self, label: &str) -> Result<FuzzySet, ManagerError> {
        self.map()
            .remove(label)
            .ok_or_else(|| ManagerError::NameNotFoundError(label.to_owned()))
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let prop: FuzzySetJsonProp = serde_json::from_value(json_value)?;
        let function = MembershipFunction::from_parameters(&prop.function, &prop.parameters)?;
        self.insert(FuzzySet::new(prop.label, prop.color, function));
        Ok(())
    }

    pub fn insert_obj_from_json_vec(
        &self,
        json_vec: &Vec<serde_json::Value>,
    ) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}

impl Default for FuzzySetManager {
    fn default() -> FuzzySetManager {
        FuzzySetManager::new()
    }
}
