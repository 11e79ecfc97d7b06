//! Category display formatting

/// Format the category registry for display
pub fn format_category_list(categories: &[String]) -> String {
    let mut output = String::from("Existing categories:\n");
    for name in categories {
        output.push_str(name);
        output.push('\n');
    }
    output
}
