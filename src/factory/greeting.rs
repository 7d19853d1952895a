/// Name substituted by [`make_default_greeting`] when given an empty name.
pub const DEFAULT_GREETING_NAME: &str = "World";

/// Formats `"{greeting}, {name}"`.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::greet;
///
/// assert_eq!(greet("Yo", "class"), "Yo, class");
/// ```
pub fn greet(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}")
}

/// Fixes the first argument of [`greet`], returning a name transformer.
///
/// The prefix is owned by the returned closure. An empty prefix is kept as
/// is, so the output starts with `", "`.
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::make_greeter;
///
/// let gday = make_greeter("G'day");
/// let yo = make_greeter(String::from("Yo"));
///
/// assert_eq!(gday("Gophers"), "G'day, Gophers");
/// assert_eq!(yo("class"), "Yo, class");
/// assert_eq!(make_greeter("")("anyone"), ", anyone");
/// ```
pub fn make_greeter(prefix: impl Into<String>) -> impl Fn(&str) -> String + Clone + Send + Sync {
    let prefix = prefix.into();
    move |name: &str| greet(&prefix, name)
}

/// Returns a thunk producing `"Hello, {name}!"`.
///
/// An empty `name` is replaced by [`DEFAULT_GREETING_NAME`].
///
/// # Examples
///
/// ```rust
/// use funcseq::factory::make_default_greeting;
///
/// assert_eq!(make_default_greeting("")(), "Hello, World!");
/// assert_eq!(make_default_greeting("Gopher")(), "Hello, Gopher!");
/// ```
pub fn make_default_greeting(name: &str) -> impl Fn() -> String + Clone + Send + Sync {
    let name = if name.is_empty() {
        DEFAULT_GREETING_NAME.to_owned()
    } else {
        name.to_owned()
    };
    move || format!("Hello, {name}!")
}
