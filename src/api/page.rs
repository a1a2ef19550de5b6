use crate::Domain;

/// What the page shows under the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Answer(String),
    Warning(String),
    Failure(String),
}

/// Values echoed back into the form. The API key is never echoed.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub question: String,
    pub domain: Domain,
}

pub fn render(form: &FormState, outcome: &Outcome) -> String {
    let options: String = Domain::ALL
        .iter()
        .map(|domain| {
            let selected = if *domain == form.domain { " selected" } else { "" };
            format!(r#"<option value="{domain}"{selected}>{domain}</option>"#)
        })
        .collect();

    let result = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Answer(answer) => format!(
            r#"<div class="answer"><strong>Answer:</strong> {}</div>"#,
            escape(answer)
        ),
        Outcome::Warning(message) => format!(r#"<div class="warning">{}</div>"#, escape(message)),
        Outcome::Failure(message) => format!(r#"<div class="error">{}</div>"#, escape(message)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Domain Specific QA System</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
label {{ display: block; margin-top: 1rem; }}
input[type=text], input[type=password], select {{ width: 100%; }}
.answer {{ margin-top: 1.5rem; white-space: pre-wrap; }}
.warning {{ margin-top: 1.5rem; padding: .5rem; background: #fff4ce; }}
.error {{ margin-top: 1.5rem; padding: .5rem; background: #fde7e9; }}
</style>
</head>
<body>
<h1>Domain Specific QA System</h1>
<form method="post" action="/">
<label>Enter your OpenAI API Key:
<input type="password" name="api_key" autocomplete="off"></label>
<label>Enter your question:
<input type="text" name="question" value="{question}"></label>
<label>Select the domain:
<select name="domain">{options}</select></label>
<p><button type="submit">Get Answer</button></p>
</form>
{result}
</body>
</html>
"#,
        question = escape(&form.question),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
