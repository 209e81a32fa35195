//! Edit Form
//!
//! Form model behind the edit modal. Party names are edited as a list of rows;
//! blank rows never reach the backend.

use crate::models::Contract;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub contract_type: String,
    pub party_names: Vec<String>,
    pub amount: String,
    pub date: String,
    pub expiration_date: String,
}

impl EditForm {
    /// Pre-fill from a contract; always at least one party row
    pub fn from_contract(contract: &Contract) -> Self {
        let variables = &contract.variables;
        let mut party_names = variables.party_names().to_vec();
        if party_names.is_empty() {
            party_names.push(String::new());
        }
        Self {
            contract_type: variables.contract_type.clone().unwrap_or_default(),
            party_names,
            amount: variables.amount.clone().unwrap_or_default(),
            date: variables.date.clone().unwrap_or_default(),
            expiration_date: variables.expiration_date.clone().unwrap_or_default(),
        }
    }

    pub fn set_party(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.party_names.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_party(&mut self) {
        self.party_names.push(String::new());
    }

    /// The last remaining row cannot be removed
    pub fn can_remove_party(&self) -> bool {
        self.party_names.len() > 1
    }

    pub fn remove_party(&mut self, index: usize) {
        if self.can_remove_party() && index < self.party_names.len() {
            self.party_names.remove(index);
        }
    }

    /// Party names that will be saved
    pub fn cleaned_party_names(&self) -> Vec<String> {
        self.party_names
            .iter()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Copy of `contract` carrying the form's values
    ///
    /// Signatures and free-form fields are kept as they were. Empty inputs
    /// are sent as absent rather than as empty strings.
    pub fn apply_to(&self, contract: &Contract) -> Contract {
        let mut updated = contract.clone();
        let variables = &mut updated.variables;
        variables.contract_type = non_empty(&self.contract_type);
        variables.party_names = Some(self.cleaned_party_names());
        variables.amount = non_empty(&self.amount);
        variables.date = non_empty(&self.date);
        variables.expiration_date = non_empty(&self.expiration_date);
        updated
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractVariables, ExtractionStatus};

    fn sample() -> Contract {
        Contract {
            id: "c-1".to_string(),
            filename: "c-1_msa.docx".to_string(),
            original_filename: "msa.docx".to_string(),
            file_path: "uploads/c-1_msa.docx".to_string(),
            file_size: Some(1024),
            upload_date: None,
            variables: ContractVariables {
                contract_type: Some("MSA".to_string()),
                party_names: Some(vec!["Acme".to_string(), "Globex".to_string()]),
                amount: Some("$5,000".to_string()),
                signatures: Some(vec!["J. Doe".to_string()]),
                ..Default::default()
            },
            extraction_status: ExtractionStatus::ManualRequired,
            extracted_text: None,
            user_id: "user1".to_string(),
        }
    }

    #[test]
    fn test_prefill() {
        let form = EditForm::from_contract(&sample());
        assert_eq!(form.contract_type, "MSA");
        assert_eq!(form.party_names, vec!["Acme", "Globex"]);
        assert_eq!(form.amount, "$5,000");
        assert_eq!(form.date, "");
    }

    #[test]
    fn test_prefill_without_parties_has_one_row() {
        let mut contract = sample();
        contract.variables.party_names = None;
        let form = EditForm::from_contract(&contract);
        assert_eq!(form.party_names, vec![""]);
        assert!(!form.can_remove_party());
    }

    #[test]
    fn test_blank_parties_dropped_on_save() {
        let contract = sample();
        let mut form = EditForm::from_contract(&contract);
        form.add_party();
        form.add_party();
        form.set_party(3, "Initech");
        form.set_party(1, "   ");

        let updated = form.apply_to(&contract);
        assert_eq!(
            updated.variables.party_names,
            Some(vec!["Acme".to_string(), "Initech".to_string()])
        );
        // Untouched fields survive
        assert_eq!(updated.variables.signatures(), ["J. Doe"]);
        assert_eq!(updated.id, "c-1");
    }

    #[test]
    fn test_empty_inputs_become_absent() {
        let contract = sample();
        let mut form = EditForm::from_contract(&contract);
        form.amount.clear();
        form.date = "2024-05-01".to_string();

        let updated = form.apply_to(&contract);
        assert_eq!(updated.variables.amount, None);
        assert_eq!(updated.variables.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_remove_party_keeps_last_row() {
        let mut form = EditForm::from_contract(&sample());
        form.remove_party(0);
        assert_eq!(form.party_names, vec!["Globex"]);
        form.remove_party(0);
        assert_eq!(form.party_names, vec!["Globex"]);
        form.remove_party(5);
        assert_eq!(form.party_names.len(), 1);
    }
}
