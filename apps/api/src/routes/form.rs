use axum::response::Html;

use crate::models::letter::LetterModel;

/// GET /
/// Serves the input form. The generate button stays disabled while a request is pending.
pub async fn form_handler() -> Html<String> {
    Html(render_form())
}

fn render_form() -> String {
    let options = LetterModel::ALL
        .iter()
        .map(|m| format!("<option value=\"{m}\">{m}</option>"))
        .collect::<Vec<_>>()
        .join("");
    FORM_HTML.replace("{model_options}", &options)
}

const FORM_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Cover Letter Generator</title>
<style>
body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
textarea, input, select { width: 100%; box-sizing: border-box; margin-bottom: 1rem; }
#error { color: #b00020; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>AI Cover Letter Generator</h1>
<p>Paste your personal info and the job advertisement, then press <b>Generate</b>.
Don't paste very sensitive data.</p>
<form id="letter-form">
  <label>Your personal info (name, contact, short bullets about experience/skills)
    <textarea name="personal_info" rows="8"></textarea></label>
  <label>or upload it (.txt) <input type="file" name="personal_file" accept=".txt,text/plain"></label>
  <label>Job offer text (paste the full ad)
    <textarea name="job_posting" rows="12"></textarea></label>
  <label>or upload it (.txt) <input type="file" name="job_file" accept=".txt,text/plain"></label>
  <label>Availability (optional, e.g. 'from March 2026')
    <input type="text" name="availability"></label>
  <label>Letter language (optional)
    <input type="text" name="language" placeholder="e.g. French"></label>
  <label>Model <select name="model">{model_options}</select></label>
  <button type="submit" id="generate">Generate cover letter</button>
</form>
<p id="error"></p>
<div id="preview" hidden>
  <h2>Preview</h2>
  <textarea id="letter" rows="16"></textarea>
  <button id="download">Download as PDF</button>
</div>
<script>
const form = document.getElementById("letter-form");
const button = document.getElementById("generate");
const errorBox = document.getElementById("error");
const sessionId = crypto.randomUUID();

async function failure(response) {
  try { return (await response.json()).error.message; } catch (_) { return response.statusText; }
}

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  if (button.disabled) return;
  button.disabled = true;
  button.textContent = "Generating letter with AI...";
  errorBox.textContent = "";
  const data = new FormData(form);
  data.append("session_id", sessionId);
  try {
    const response = await fetch("/api/v1/cover-letters/upload", { method: "POST", body: data });
    if (!response.ok) { errorBox.textContent = await failure(response); return; }
    const body = await response.json();
    document.getElementById("letter").value = body.letter;
    document.getElementById("preview").hidden = false;
  } catch (e) {
    errorBox.textContent = String(e);
  } finally {
    button.disabled = false;
    button.textContent = "Generate cover letter";
  }
});

document.getElementById("download").addEventListener("click", async () => {
  const personal = form.elements["personal_info"].value.split("\n").find(l => l.trim()) || "Candidate";
  const response = await fetch("/api/v1/render", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify({ letter: document.getElementById("letter").value, author: personal.trim() })
  });
  if (!response.ok) { errorBox.textContent = await failure(response); return; }
  const url = URL.createObjectURL(await response.blob());
  const link = document.createElement("a");
  link.href = url;
  link.download = "cover_letter.pdf";
  link.click();
  URL.revokeObjectURL(url);
});
</script>
</body>
</html>
"#;
