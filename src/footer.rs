pub const FOOTER_TEXT: &str =
    "Python Learning Arena - Practice your coding skills for technical interviews.";

pub fn render() -> String {
    let rule = "-".repeat(FOOTER_TEXT.len());
    format!("{}\n{}\n{}", rule, FOOTER_TEXT, rule)
}

pub fn render_html() -> String {
    format!("<footer class=\"footer\"><p>{}</p></footer>", FOOTER_TEXT)
}

pub fn print() {
    println!("{}", render());
}
