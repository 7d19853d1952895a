/// A named person with an age.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Builds a person through the builder-style API.
    ///
    /// Starts from `Person::default()` and threads the value through
    /// [`Self::with_name`] and [`Self::with_age`].
    #[must_use]
    pub fn build(name: impl Into<String>, age: u32) -> Self {
        Self::default().with_name(name).with_age(age)
    }

    /// Builds a person on the heap through the mutator API.
    ///
    /// Allocates a default record and updates it with [`Self::set_name`] and
    /// [`Self::set_age`].
    #[must_use]
    pub fn build_in_place(name: impl Into<String>, age: u32) -> Box<Self> {
        let mut person = Box::<Self>::default();
        person.set_name(name);
        person.set_age(age);
        person
    }

    /// Returns a copy with `name` replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::record::Person;
    ///
    /// let original = Person::build("Ada", 36);
    /// let renamed = original.clone().with_name("Grace");
    /// assert_eq!(original.name, "Ada");
    /// assert_eq!(renamed.name, "Grace");
    /// ```
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Returns a copy with `age` replaced.
    #[must_use]
    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }

    /// Replaces the name in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcseq::record::Person;
    ///
    /// let mut person = Person::build("Ada", 36);
    /// person.set_name("Grace");
    /// assert_eq!(person.name, "Grace");
    /// ```
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the age in place.
    pub const fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}
