/// A configuration value, together with the bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value, if the value is within bounds.
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        if self.min <= value && value <= self.max {
            self.value = value;
            true
        } else {
            false
        }
    }
}
