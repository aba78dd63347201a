/// String literal unescaping.
///
/// Turns the body of a quoted literal into the string it denotes. Quoted
/// literals are unescaped once, at compile time, so evaluating a literal never
/// has to look at backslashes again.
pub mod escape;
