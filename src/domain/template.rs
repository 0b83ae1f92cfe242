/// A fetched template, reduced to the parts the page actually shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    // inner markup of the template's content region
    pub content: String,
    // display title taken from the template's meta region
    pub title: String,
}
