use crate::error::TemplateError;

/// Positional marker kinds emitted for occurrences whose values are
/// carried next to the step text instead of inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Static,
    Dynamic,
    Special,
}

impl Marker {
    pub fn keyword(self) -> &'static str {
        match self {
            Marker::Static => "static",
            Marker::Dynamic => "dynamic",
            Marker::Special => "special",
        }
    }

    fn from_keyword(word: &str) -> Option<Marker> {
        match word {
            "static" => Some(Marker::Static),
            "dynamic" => Some(Marker::Dynamic),
            "special" => Some(Marker::Special),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain step text (escapes resolved)
    Text(String),
    /// `<name>` placeholder
    Dynamic(String),
    /// `"literal"` placeholder (content without quotes, escapes resolved)
    Static(String),
    /// `{static}`, `{dynamic}` or `{special}`
    Marker(Marker),
}

impl Fragment {
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Fragment::Text(_))
    }

    /// The name a placeholder is matched under. Literals are their own
    /// name; positional markers are named by their keyword.
    pub fn name(&self) -> Option<&str> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Dynamic(name) => Some(name.as_str()),
            Fragment::Static(literal) => Some(literal.as_str()),
            Fragment::Marker(marker) => Some(marker.keyword()),
        }
    }

    /// Render the fragment back to step-text syntax.
    pub fn render(&self) -> String {
        match self {
            Fragment::Text(text) => escape_text(text),
            Fragment::Dynamic(name) => format!("<{}>", name),
            Fragment::Static(literal) => {
                format!("\"{}\"", literal.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Fragment::Marker(marker) => format!("{{{}}}", marker.keyword()),
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '<' | '"' | '{' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Split a step text into plain-text and placeholder fragments.
///
/// Adjacent plain characters are merged into one `Text` fragment. A
/// backslash outside a placeholder makes the next character plain text.
pub fn lex(src: &str) -> Result<Vec<Fragment>, TemplateError> {
    let mut fragments = Vec::new();
    let chars: Vec<char> = src.chars().collect();
    let mut pos = 0usize;
    let mut text = String::new();

    while pos < chars.len() {
        let c = chars[pos];
        let start = pos;

        // Escaped character
        if c == '\\' {
            match chars.get(pos + 1) {
                Some(&next) => text.push(next),
                None => text.push('\\'),
            }
            pos += 2;
            continue;
        }

        // Dynamic placeholder
        if c == '<' {
            pos += 1;
            let mut name = String::new();
            loop {
                match chars.get(pos) {
                    None => {
                        return Err(TemplateError::UnterminatedDynamic {
                            text: src.to_owned(),
                            column: start,
                        })
                    }
                    Some('>') => {
                        pos += 1;
                        break;
                    }
                    Some(&nc) => {
                        name.push(nc);
                        pos += 1;
                    }
                }
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder {
                    text: src.to_owned(),
                    column: start,
                });
            }
            flush_text(&mut text, &mut fragments);
            fragments.push(Fragment::Dynamic(name.to_owned()));
            continue;
        }

        // Static placeholder
        if c == '"' {
            pos += 1;
            let mut literal = String::new();
            loop {
                match chars.get(pos) {
                    None => {
                        return Err(TemplateError::UnterminatedStatic {
                            text: src.to_owned(),
                            column: start,
                        })
                    }
                    Some('"') => {
                        pos += 1;
                        break;
                    }
                    Some('\\') => {
                        match chars.get(pos + 1) {
                            Some('"') => literal.push('"'),
                            Some('\\') => literal.push('\\'),
                            Some(&other) => {
                                literal.push('\\');
                                literal.push(other);
                            }
                            None => {
                                return Err(TemplateError::UnterminatedStatic {
                                    text: src.to_owned(),
                                    column: start,
                                })
                            }
                        }
                        pos += 2;
                    }
                    Some(&sc) => {
                        literal.push(sc);
                        pos += 1;
                    }
                }
            }
            flush_text(&mut text, &mut fragments);
            fragments.push(Fragment::Static(literal));
            continue;
        }

        // Positional marker
        if c == '{' {
            pos += 1;
            let mut word = String::new();
            loop {
                match chars.get(pos) {
                    None => {
                        return Err(TemplateError::UnterminatedMarker {
                            text: src.to_owned(),
                            column: start,
                        })
                    }
                    Some('}') => {
                        pos += 1;
                        break;
                    }
                    Some(&mc) => {
                        word.push(mc);
                        pos += 1;
                    }
                }
            }
            let marker = Marker::from_keyword(word.trim()).ok_or_else(|| {
                TemplateError::UnknownMarker {
                    text: src.to_owned(),
                    marker: word.trim().to_owned(),
                    column: start,
                }
            })?;
            flush_text(&mut text, &mut fragments);
            fragments.push(Fragment::Marker(marker));
            continue;
        }

        text.push(c);
        pos += 1;
    }

    flush_text(&mut text, &mut fragments);
    Ok(fragments)
}

fn flush_text(text: &mut String, fragments: &mut Vec<Fragment>) {
    if !text.is_empty() {
        fragments.push(Fragment::Text(std::mem::take(text)));
    }
}
