use thiserror::Error;

use crate::data_models::{LOCATIONS, PET_TYPES, SERVICES, SearchCriteria};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("option {index} is out of range for {dropdown:?} ({len} options)")]
    OptionOutOfRange {
        dropdown: Dropdown,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    PetType,
    Location,
    Service,
}

impl Dropdown {
    pub const ALL: [Dropdown; 3] = [Dropdown::PetType, Dropdown::Location, Dropdown::Service];

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Dropdown::PetType => &PET_TYPES,
            Dropdown::Location => &LOCATIONS,
            Dropdown::Service => &SERVICES,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Dropdown::PetType => "Pet Type",
            Dropdown::Location => "Location",
            Dropdown::Service => "Pet Service",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Dropdown::PetType => "Select pet type",
            Dropdown::Location => "Select location",
            Dropdown::Service => "Select service",
        }
    }
}

/// Field values plus the open/closed flag of each dropdown.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    criteria: SearchCriteria,
    pet_open: bool,
    location_open: bool,
    service_open: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        match dropdown {
            Dropdown::PetType => self.pet_open,
            Dropdown::Location => self.location_open,
            Dropdown::Service => self.service_open,
        }
    }

    pub fn open_dropdown(&self) -> Option<Dropdown> {
        Dropdown::ALL.into_iter().find(|d| self.is_open(*d))
    }

    /// Flips `dropdown` and closes the other two.
    pub fn toggle(&mut self, dropdown: Dropdown) {
        let open = !self.is_open(dropdown);
        self.pet_open = dropdown == Dropdown::PetType && open;
        self.location_open = dropdown == Dropdown::Location && open;
        self.service_open = dropdown == Dropdown::Service && open;
    }

    /// Sets the field behind `dropdown` to `option` and closes it.
    ///
    /// The value is stored as given; the option lists are not enforced.
    pub fn select(&mut self, dropdown: Dropdown, option: &str) {
        let field = match dropdown {
            Dropdown::PetType => &mut self.criteria.pet_type,
            Dropdown::Location => &mut self.criteria.location,
            Dropdown::Service => &mut self.criteria.pet_service,
        };
        *field = option.to_string();
        self.close(dropdown);
    }

    pub fn select_index(&mut self, dropdown: Dropdown, index: usize) -> Result<(), FormError> {
        let options = dropdown.options();
        let option = options.get(index).ok_or(FormError::OptionOutOfRange {
            dropdown,
            index,
            len: options.len(),
        })?;
        self.select(dropdown, option);
        Ok(())
    }

    /// Selects by position when `value` is a number, otherwise by literal.
    pub fn choose(&mut self, dropdown: Dropdown, value: &str) -> Result<(), FormError> {
        match value.trim().parse::<usize>() {
            Ok(index) => self.select_index(dropdown, index),
            Err(_) => {
                self.select(dropdown, value);
                Ok(())
            }
        }
    }

    pub fn set_date_range(&mut self, text: impl Into<String>) {
        self.criteria.date_range = text.into();
    }

    /// Header text of a dropdown: the chosen value, or its prompt.
    pub fn label(&self, dropdown: Dropdown) -> &str {
        let value = match dropdown {
            Dropdown::PetType => &self.criteria.pet_type,
            Dropdown::Location => &self.criteria.location,
            Dropdown::Service => &self.criteria.pet_service,
        };
        if value.is_empty() {
            dropdown.prompt()
        } else {
            value
        }
    }

    fn close(&mut self, dropdown: Dropdown) {
        match dropdown {
            Dropdown::PetType => self.pet_open = false,
            Dropdown::Location => self.location_open = false,
            Dropdown::Service => self.service_open = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(form: &FormState) -> usize {
        Dropdown::ALL.iter().filter(|d| form.is_open(**d)).count()
    }

    #[test]
    fn test_opening_one_closes_the_others() {
        let mut form = FormState::new();
        for first in Dropdown::ALL {
            for second in Dropdown::ALL {
                if first == second {
                    continue;
                }
                form.toggle(first);
                assert_eq!(form.open_dropdown(), Some(first));
                form.toggle(second);
                assert_eq!(form.open_dropdown(), Some(second));
                assert_eq!(open_count(&form), 1);
                form.toggle(second);
                assert_eq!(open_count(&form), 0);
            }
        }
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut form = FormState::new();
        form.toggle(Dropdown::Location);
        assert!(form.is_open(Dropdown::Location));
        form.toggle(Dropdown::Location);
        assert_eq!(form.open_dropdown(), None);
    }

    #[test]
    fn test_select_sets_literal_and_closes() {
        let mut form = FormState::new();
        for dropdown in Dropdown::ALL {
            for option in dropdown.options() {
                form.toggle(dropdown);
                form.select(dropdown, option);
                assert!(!form.is_open(dropdown));
                assert_eq!(form.label(dropdown), *option);
            }
        }
        assert_eq!(form.criteria().pet_type, "Iguanas");
        assert_eq!(form.criteria().location, "North-East (District 11-13, 24-25)");
        assert_eq!(form.criteria().pet_service, "Pet Hotel");
    }

    #[test]
    fn test_select_leaves_other_open_dropdown_alone() {
        let mut form = FormState::new();
        form.toggle(Dropdown::Service);
        form.select(Dropdown::PetType, "Cats");
        assert!(form.is_open(Dropdown::Service));
        assert_eq!(form.criteria().pet_type, "Cats");
    }

    #[test]
    fn test_labels_fall_back_to_prompt() {
        let form = FormState::new();
        assert_eq!(form.label(Dropdown::PetType), "Select pet type");
        assert_eq!(form.label(Dropdown::Location), "Select location");
        assert_eq!(form.label(Dropdown::Service), "Select service");
    }

    #[test]
    fn test_select_index() {
        let mut form = FormState::new();
        form.select_index(Dropdown::PetType, 4).unwrap();
        assert_eq!(form.criteria().pet_type, "Guinea Pigs");

        let err = form.select_index(Dropdown::Service, 3).unwrap_err();
        assert_eq!(
            err,
            FormError::OptionOutOfRange {
                dropdown: Dropdown::Service,
                index: 3,
                len: 3
            }
        );
        assert!(form.criteria().pet_service.is_empty());
    }

    #[test]
    fn test_choose_by_number_or_literal() {
        let mut form = FormState::new();
        form.choose(Dropdown::Location, "2").unwrap();
        assert_eq!(form.criteria().location, "East (District 14-18)");

        form.choose(Dropdown::Service, "Sitter").unwrap();
        assert_eq!(form.criteria().pet_service, "Sitter");

        assert!(form.choose(Dropdown::PetType, "10").is_err());
        assert!(form.criteria().pet_type.is_empty());
    }

    #[test]
    fn test_option_list_sizes() {
        assert_eq!(Dropdown::PetType.options().len(), 10);
        assert_eq!(Dropdown::Location.options().len(), 6);
        assert_eq!(Dropdown::Service.options().len(), 3);
    }
}
