//! JSX snippet synthesis for descriptors, and the matching literal parser.
//!
//! Literals are JSON-style object/array/number/string values. The single
//! extension is the bare `Infinity` token used for endless repeats.

use std::fmt::Write as _;

use serde_json::{Map, Number, Value as Json};

use crate::descriptor::MotionDescriptor;
use crate::error::DescriptorError;
use crate::transition::{Repeat, Transition, TransitionKind};
use crate::value::{MotionValue, PropertyMap};
use crate::Result;

const CONTENT: &str = "Your content here";
const ATTRIBUTES: [&str; 3] = ["initial", "animate", "transition"];

/// Render a descriptor as an animated-element snippet:
///
/// ```text
/// <motion.div
///   initial={{"opacity":0}}
///   animate={{"opacity":1}}
///   transition={{"duration":0.5,"delay":0,"ease":"easeOut"}}
/// >
///   Your content here
/// </motion.div>
/// ```
pub fn render_code(descriptor: &MotionDescriptor) -> String {
    let initial = properties_literal(&descriptor.initial);
    let animate = properties_literal(&descriptor.animate);
    let transition = transition_literal(&descriptor.transition);

    let mut out = String::from("<motion.div\n");
    for (name, lit) in ATTRIBUTES.iter().zip([initial, animate, transition]) {
        let _ = writeln!(out, "  {name}={{{}}}", lit.render());
    }
    out.push_str(">\n  ");
    out.push_str(CONTENT);
    out.push_str("\n</motion.div>");
    out
}

/// Recover the descriptor embedded in a snippet produced by [`render_code`].
pub fn parse_code(code: &str) -> Result<MotionDescriptor> {
    let initial: PropertyMap = serde_json::from_value(attribute(code, "initial")?.into_json()?)?;
    let animate: PropertyMap = serde_json::from_value(attribute(code, "animate")?.into_json()?)?;
    let transition: Transition =
        serde_json::from_value(attribute(code, "transition")?.into_json()?)?;
    Ok(MotionDescriptor {
        initial,
        animate,
        transition,
    })
}

fn attribute(code: &str, name: &str) -> Result<Literal> {
    let marker = format!("{name}={{");
    let start = find_outside_strings(code, &marker)
        .ok_or_else(|| DescriptorError::parse(format!("missing `{name}` attribute")))?
        + marker.len();
    let mut p = LiteralParser::new(&code[start..]);
    let lit = p.value()?;
    p.expect(b'}')?;
    Ok(lit)
}

/// First occurrence of `marker` that is not inside a double-quoted string.
fn find_outside_strings(code: &str, marker: &str) -> Option<usize> {
    let bytes = code.as_bytes();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_string => i += 1,
            b'"' => in_string = !in_string,
            _ if !in_string && bytes[i..].starts_with(marker.as_bytes()) => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

#[derive(Clone, Debug, PartialEq)]
enum Literal {
    Number(f64),
    Str(String),
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Literal {
    fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Literal::Number(n) => write_number(out, *n),
            Literal::Str(s) => write_string(out, s),
            Literal::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write(out);
                }
                out.push(']');
            }
            Literal::Object(fields) => {
                out.push('{');
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_string(out, k);
                    out.push(':');
                    v.write(out);
                }
                out.push('}');
            }
        }
    }

    /// JSON view for serde decoding; `Infinity` becomes the string "Infinity".
    /// Any other non-finite number has no descriptor meaning.
    fn into_json(self) -> Result<Json> {
        Ok(match self {
            Literal::Number(n) if n == f64::INFINITY => Json::String("Infinity".to_string()),
            Literal::Number(n) => Json::Number(
                Number::from_f64(n)
                    .ok_or_else(|| DescriptorError::parse(format!("unsupported number {n}")))?,
            ),
            Literal::Str(s) => Json::String(s),
            Literal::Array(items) => Json::Array(
                items
                    .into_iter()
                    .map(Literal::into_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Literal::Object(fields) => {
                let map = fields
                    .into_iter()
                    .map(|(k, v)| Ok((k, v.into_json()?)))
                    .collect::<Result<Map<String, Json>>>()?;
                Json::Object(map)
            }
        })
    }
}

fn write_number(out: &mut String, n: f64) {
    if n.is_infinite() {
        out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        // Display is the shortest representation that parses back exactly.
        let _ = write!(out, "{n}");
    }
}

fn write_string(out: &mut String, s: &str) {
    // JSON string escaping is valid JS string escaping.
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
    }
}

fn motion_value_literal(v: &MotionValue) -> Literal {
    match v {
        MotionValue::Number(n) => Literal::Number(*n),
        MotionValue::Keyframes(frames) => {
            Literal::Array(frames.iter().copied().map(Literal::Number).collect())
        }
        MotionValue::Text(s) => Literal::Str(s.clone()),
    }
}

fn properties_literal(map: &PropertyMap) -> Literal {
    Literal::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), motion_value_literal(v)))
            .collect(),
    )
}

fn transition_literal(t: &Transition) -> Literal {
    let mut fields = Vec::new();
    if let Some(d) = t.duration {
        fields.push(("duration".to_string(), Literal::Number(d)));
    }
    fields.push(("delay".to_string(), Literal::Number(t.delay)));
    if let Some(ease) = t.ease {
        fields.push(("ease".to_string(), Literal::Str(ease.id().to_string())));
    }
    if let Some(kind) = t.kind {
        let name = match kind {
            TransitionKind::Tween => "tween",
            TransitionKind::Spring => "spring",
        };
        fields.push(("type".to_string(), Literal::Str(name.to_string())));
    }
    for (name, v) in [
        ("stiffness", t.stiffness),
        ("damping", t.damping),
        ("bounce", t.bounce),
    ] {
        if let Some(v) = v {
            fields.push((name.to_string(), Literal::Number(v)));
        }
    }
    if let Some(repeat) = t.repeat {
        let n = match repeat {
            Repeat::Count(n) => f64::from(n),
            Repeat::Infinite => f64::INFINITY,
        };
        fields.push(("repeat".to_string(), Literal::Number(n)));
    }
    Literal::Object(fields)
}

struct LiteralParser<'a> {
    src: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            src: text.as_bytes(),
            text,
            pos: 0,
        }
    }

    fn err(&self, what: &str) -> DescriptorError {
        DescriptorError::parse(format!("{what} at offset {}", self.pos))
    }

    fn skip_ws(&mut self) {
        while self.pos < self.src.len() && self.src[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn expect(&mut self, c: u8) -> Result<()> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.err(&format!("expected `{}`", c as char)))
        }
    }

    fn value(&mut self) -> Result<Literal> {
        match self.peek() {
            Some(b'{') => self.object(),
            Some(b'[') => self.array(),
            Some(b'"') => self.string().map(Literal::Str),
            Some(c) if c == b'-' || c.is_ascii_digit() || c == b'I' => self.number(),
            Some(_) => Err(self.err("unexpected character")),
            None => Err(self.err("unexpected end of input")),
        }
    }

    fn object(&mut self) -> Result<Literal> {
        self.expect(b'{')?;
        let mut fields = Vec::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Literal::Object(fields));
        }
        loop {
            let key = match self.peek() {
                Some(b'"') => self.string()?,
                _ => self.identifier()?,
            };
            self.expect(b':')?;
            fields.push((key, self.value()?));
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Literal::Object(fields));
                }
                _ => return Err(self.err("expected `,` or `}`")),
            }
        }
    }

    fn array(&mut self) -> Result<Literal> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Literal::Array(items));
        }
        loop {
            items.push(self.value()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Literal::Array(items));
                }
                _ => return Err(self.err("expected `,` or `]`")),
            }
        }
    }

    fn string(&mut self) -> Result<String> {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.src.len() {
            match self.src[self.pos] {
                b'\\' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return serde_json::from_str(&self.text[start..self.pos])
                        .map_err(|e| self.err(&format!("bad string literal ({e})")));
                }
                _ => self.pos += 1,
            }
        }
        Err(self.err("unterminated string"))
    }

    fn identifier(&mut self) -> Result<String> {
        let start = self.pos;
        while self.pos < self.src.len()
            && (self.src[self.pos].is_ascii_alphanumeric()
                || self.src[self.pos] == b'_'
                || self.src[self.pos] == b'$')
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.err("expected property name"));
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn number(&mut self) -> Result<Literal> {
        let start = self.pos;
        let negative = self.src[self.pos] == b'-';
        if negative {
            self.pos += 1;
        }
        if self.text[self.pos..].starts_with("Infinity") {
            self.pos += "Infinity".len();
            let inf = if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Ok(Literal::Number(inf));
        }
        while self.pos < self.src.len()
            && matches!(self.src[self.pos], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
        {
            self.pos += 1;
        }
        self.text[start..self.pos]
            .parse::<f64>()
            .map(Literal::Number)
            .map_err(|_| self.err("invalid number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::build_descriptor;
    use crate::params::{Easing, MotionParams};

    #[test]
    fn renders_fixed_template() {
        let params = MotionParams::new(0.5, 0.0, Easing::EaseOut).unwrap();
        let code = render_code(&build_descriptor("slideInUp", &params));
        assert_eq!(
            code,
            "<motion.div\n  initial={{\"opacity\":0,\"y\":50}}\n  animate={{\"opacity\":1,\"y\":0}}\n  transition={{\"duration\":0.5,\"delay\":0,\"ease\":\"easeOut\"}}\n>\n  Your content here\n</motion.div>"
        );
    }

    #[test]
    fn infinite_repeat_renders_as_infinity() {
        let code = render_code(&build_descriptor("rotate", &MotionParams::default()));
        assert!(code.contains("\"repeat\":Infinity"));
        assert!(code.contains("\"ease\":\"linear\""));
    }

    #[test]
    fn literal_parser_accepts_js_forms() {
        let mut p = LiteralParser::new(r#"{ opacity: 0, "scale": [1, 1.05, 1], f: "blur(2px)", r: -Infinity }"#);
        let lit = p.value().unwrap();
        assert_eq!(
            lit,
            Literal::Object(vec![
                ("opacity".into(), Literal::Number(0.0)),
                (
                    "scale".into(),
                    Literal::Array(vec![
                        Literal::Number(1.0),
                        Literal::Number(1.05),
                        Literal::Number(1.0)
                    ])
                ),
                ("f".into(), Literal::Str("blur(2px)".into())),
                ("r".into(), Literal::Number(f64::NEG_INFINITY)),
            ])
        );
    }

    #[test]
    fn strings_with_escapes_survive() {
        let lit = Literal::Str("say \"hi\"\n".into());
        let rendered = lit.render();
        let mut p = LiteralParser::new(&rendered);
        assert_eq!(p.value().unwrap(), lit);
    }

    #[test]
    fn negative_infinity_is_rejected() {
        let code = "initial={{ opacity: 0 }}\nanimate={{ opacity: 1 }}\ntransition={{ delay: 0, repeat: -Infinity }}";
        assert!(matches!(parse_code(code), Err(DescriptorError::Parse { .. })));
        let code = "initial={{ opacity: -Infinity }}\nanimate={{ opacity: 1 }}\ntransition={{ delay: 0 }}";
        assert!(matches!(parse_code(code), Err(DescriptorError::Parse { .. })));
    }

    #[test]
    fn markers_inside_strings_are_skipped() {
        let code = "<motion.div\n  initial={{ filter: \"animate={{x\" }}\n  animate={{ filter: \"b\" }}\n  transition={{ delay: 0 }}\n/>";
        assert_eq!(
            find_outside_strings(code, "animate={"),
            code.find("  animate={").map(|i| i + 2)
        );
        let d = parse_code(code).unwrap();
        assert_eq!(d.animate.get("filter"), Some(&MotionValue::Text("b".into())));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!(
            parse_code("<motion.div />"),
            Err(DescriptorError::Parse { .. })
        ));
        assert!(matches!(
            parse_code("initial={{\"opacity\":0"),
            Err(DescriptorError::Parse { .. })
        ));
    }
}
