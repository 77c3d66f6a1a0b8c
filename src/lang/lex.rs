/// Splits one script line into its words.
/// The line terminator is dropped; runs of whitespace separate words.
/// Quotes have no special meaning here, so string literals cannot hold spaces.
pub fn lex(s: &str) -> Vec<String> {
    ScriptLexer::lex(trim_terminator(s))
}

fn is_script_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn trim_terminator(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}

struct ScriptLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> ScriptLexer<'a> {
    fn lex(s: &'a str) -> Vec<String> {
        let mut lexer = ScriptLexer {
            chars: s.chars().peekable(),
        };
        let mut words = vec![];
        while let Some(word) = lexer.next_word() {
            words.push(word);
        }
        words
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_script_whitespace(*pk) {
                break;
            }
            self.chars.next();
        }
    }

    fn next_word(&mut self) -> Option<String> {
        self.whitespace();
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if is_script_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }
}
