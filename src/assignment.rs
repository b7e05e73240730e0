use std::collections::HashMap;
use num_traits::Float;
use crate::{VerifyError, Malformed};

//

/// Variable assignment
///
/// Named-variable table which maps each identifier to a slot of the value array.
/// It is produced by an external solver and only read by the verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<F: Float>
{
    slots: HashMap<String, usize>,
    names: Vec<String>,
    values: Vec<F>,
}

impl<F: Float> Assignment<F>
{
    /// Creates an empty instance.
    pub fn new() -> Self
    {
        Assignment {
            slots: HashMap::new(),
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of variables.
    pub fn len(&self) -> usize
    {
        self.values.len()
    }

    /// Checks if no variable is assigned.
    pub fn is_empty(&self) -> bool
    {
        self.values.is_empty()
    }

    /// Assigns a value to a variable.
    ///
    /// Overwrites the value if `name` is already assigned, keeping its slot.
    /// * `name` is an identifier of the variable.
    /// * `value` is its value.
    pub fn set_var(&mut self, name: &str, value: F)
    {
        if let Some(&i) = self.slots.get(name) {
            self.values[i] = value;
        }
        else {
            self.slots.insert(name.to_string(), self.values.len());
            self.names.push(name.to_string());
            self.values.push(value);
        }
    }
    /// Builder pattern of [`Assignment::set_var`].
    pub fn var(mut self, name: &str, value: F) -> Self
    {
        self.set_var(name, value);
        self
    }

    /// Slot of a variable.
    ///
    /// Returns `None` if `name` is not assigned.
    pub fn slot(&self, name: &str) -> Option<usize>
    {
        self.slots.get(name).copied()
    }

    /// Value of a variable.
    ///
    /// Returns `Err` with [`VerifyError::UnboundVariable`] if `name` is not assigned.
    pub fn value(&self, name: &str) -> Result<F, VerifyError>
    {
        match self.slot(name) {
            Some(i) => Ok(self.values[i]),
            None => Err(VerifyError::UnboundVariable(name.to_string())),
        }
    }

    /// Iterates names and values in slot order.
    pub fn iter(&self) -> impl Iterator<Item=(&str, F)> + '_
    {
        self.names.iter().map(|n| n.as_str()).zip(self.values.iter().copied())
    }

    /// Checks that every value is finite.
    ///
    /// Returns `Err` with [`Malformed::NonFinite`] naming the first offending variable.
    pub fn validate(&self) -> Result<(), VerifyError>
    {
        for (name, v) in self.iter() {
            if !v.is_finite() {
                log::error!("assignment `{}` is not finite", name);
                return Err(Malformed::NonFinite(format!("assignment of `{}`", name)).into());
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for Assignment<F>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<F: Float, S: AsRef<str>> FromIterator<(S, F)> for Assignment<F>
{
    fn from_iter<T: IntoIterator<Item=(S, F)>>(iter: T) -> Self
    {
        let mut a = Assignment::new();
        for (name, value) in iter {
            a.set_var(name.as_ref(), value);
        }
        a
    }
}

//

#[test]
fn test_assignment1()
{
    let a: Assignment<f64> = [("x1", 2.), ("x2", 6.), ("x1", 3.)].into_iter().collect();

    assert_eq!(a.len(), 2);
    assert_eq!(a.slot("x2"), Some(1));
    assert_eq!(a.value("x1"), Ok(3.));
    assert_eq!(a.value("y1"), Err(VerifyError::UnboundVariable("y1".into())));
    assert!(a.validate().is_ok());

    let a = a.var("z", f64::NAN);
    assert_eq!(a.validate(), Err(VerifyError::MalformedProblem(Malformed::NonFinite("assignment of `z`".into()))));
}
