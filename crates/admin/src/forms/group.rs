//! Form groups: named collections of controls and nested groups.

use std::collections::BTreeMap;

use super::control::{ErroValidacao, FormControl, Validador};

/// Cross-field validator run against the whole group on every change.
pub type GroupValidador = fn(&FormGroup) -> Option<ErroValidacao>;

/// A member of a group: either a leaf control or a nested group.
#[derive(Debug)]
pub enum FormMember {
    Control(FormControl),
    Group(FormGroup),
}

/// Named collection of form members with group-level validators.
pub struct FormGroup {
    members: BTreeMap<&'static str, FormMember>,
    group_validators: Vec<GroupValidador>,
    group_errors: BTreeMap<&'static str, String>,
}

impl std::fmt::Debug for FormGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormGroup")
            .field("members", &self.members)
            .field("group_errors", &self.group_errors)
            .finish()
    }
}

impl FormGroup {
    pub fn builder() -> FormGroupBuilder {
        FormGroupBuilder::default()
    }

    pub fn control(&self, name: &str) -> Option<&FormControl> {
        match self.members.get(name) {
            Some(FormMember::Control(control)) => Some(control),
            _ => None,
        }
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        match self.members.get_mut(name) {
            Some(FormMember::Control(control)) => Some(control),
            _ => None,
        }
    }

    pub fn group(&self, name: &str) -> Option<&FormGroup> {
        match self.members.get(name) {
            Some(FormMember::Group(group)) => Some(group),
            _ => None,
        }
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut FormGroup> {
        match self.members.get_mut(name) {
            Some(FormMember::Group(group)) => Some(group),
            _ => None,
        }
    }

    /// Value of a leaf control, empty string when absent.
    pub fn value_of(&self, name: &str) -> &str {
        self.control(name).map(FormControl::value).unwrap_or("")
    }

    /// User edit on a leaf control; re-runs the group validators.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(control) = self.control_mut(name) {
            control.set_value(value);
        }
        self.revalidate_group();
    }

    /// Patch string members from a JSON object, recursing into nested
    /// groups. Unknown keys and non-string values are ignored, so a whole
    /// serialized record can be applied directly.
    pub fn patch_value(&mut self, value: &serde_json::Value) {
        if let Some(object) = value.as_object() {
            for (key, item) in object {
                match self.members.get_mut(key.as_str()) {
                    Some(FormMember::Control(control)) => {
                        if let Some(text) = item.as_str() {
                            control.patch(text);
                        }
                    }
                    Some(FormMember::Group(group)) => group.patch_value(item),
                    None => {}
                }
            }
        }
        self.revalidate_group();
    }

    /// Recursively mark every control (nested groups included) as touched
    /// so validation messages render.
    pub fn mark_all_touched(&mut self) {
        for member in self.members.values_mut() {
            match member {
                FormMember::Control(control) => control.mark_touched(),
                FormMember::Group(group) => group.mark_all_touched(),
            }
        }
    }

    pub fn group_errors(&self) -> &BTreeMap<&'static str, String> {
        &self.group_errors
    }

    pub fn has_error(&self, token: &str) -> bool {
        self.group_errors.contains_key(token)
    }

    /// Every member valid and no group-level errors.
    pub fn is_valid(&self) -> bool {
        self.group_errors.is_empty()
            && self.members.values().all(|member| match member {
                FormMember::Control(control) => control.is_valid(),
                FormMember::Group(group) => group.is_valid(),
            })
    }

    fn revalidate_group(&mut self) {
        let validators = self.group_validators.clone();
        let errors = validators
            .iter()
            .filter_map(|validar| validar(self))
            .collect();
        self.group_errors = errors;
    }
}

/// Builder for [`FormGroup`].
#[derive(Default)]
pub struct FormGroupBuilder {
    members: BTreeMap<&'static str, FormMember>,
    group_validators: Vec<GroupValidador>,
}

impl FormGroupBuilder {
    pub fn control(mut self, name: &'static str, validators: Vec<Validador>) -> Self {
        self.members
            .insert(name, FormMember::Control(FormControl::new(validators)));
        self
    }

    pub fn group(mut self, name: &'static str, group: FormGroup) -> Self {
        self.members.insert(name, FormMember::Group(group));
        self
    }

    pub fn validator(mut self, validator: GroupValidador) -> Self {
        self.group_validators.push(validator);
        self
    }

    pub fn build(self) -> FormGroup {
        let mut group = FormGroup {
            members: self.members,
            group_validators: self.group_validators,
            group_errors: BTreeMap::new(),
        };
        group.revalidate_group();
        group
    }
}

#[cfg(test)]
mod tests {
    use super::super::validators::{min_length, required, senhas_conferem};
    use super::*;

    fn senha_group() -> FormGroup {
        FormGroup::builder()
            .control("senha", vec![required(), min_length(8)])
            .control("verificaSenha", vec![required(), min_length(8)])
            .validator(senhas_conferem)
            .build()
    }

    #[test]
    fn unequal_passwords_invalidate_the_group() {
        let mut group = senha_group();
        group.set_value("senha", "12345678");
        group.set_value("verificaSenha", "12345679");
        assert!(group.has_error("senhaNotMatch"));
        assert!(!group.is_valid());
    }

    #[test]
    fn equal_long_passwords_validate_the_group() {
        let mut group = senha_group();
        group.set_value("senha", "12345678");
        group.set_value("verificaSenha", "12345678");
        assert!(group.is_valid());
    }

    #[test]
    fn mark_all_touched_recurses_into_nested_groups() {
        let mut form = FormGroup::builder()
            .control("nome", vec![required()])
            .group("senha", senha_group())
            .build();

        form.mark_all_touched();

        assert!(form.control("nome").unwrap().touched());
        let nested = form.group("senha").unwrap();
        assert!(nested.control("senha").unwrap().touched());
        assert!(nested.control("verificaSenha").unwrap().touched());
    }

    #[test]
    fn patch_value_fills_controls_and_skips_unknown_keys() {
        let mut form = FormGroup::builder()
            .control("nome", vec![required()])
            .control("email", vec![required()])
            .build();

        form.patch_value(&serde_json::json!({
            "id": 7,
            "nome": "João Silva",
            "email": "joao@example.com",
            "desconhecido": "x"
        }));

        assert_eq!(form.value_of("nome"), "João Silva");
        assert_eq!(form.value_of("email"), "joao@example.com");
        assert!(!form.control("nome").unwrap().dirty());
    }
}
