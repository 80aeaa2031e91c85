/// Client script: posts each control change to `/input`, renders the
/// returned state and handles the copy button.
///
/// Inputs carry an increasing `seq`; responses older than the rendered
/// state are dropped.
pub(super) fn build_inline_js(initial_state_json: &str) -> String {
    format!(
        r#"<script>
let state = {initial_state_json};
let copyTimer = null;

function render(next) {{
  state = next;
  const s = state.settings;
  const d = state.derived;

  document.getElementById('base-font-size').value = s.baseFontSize;
  document.getElementById('type-scale').value = s.typeScale;
  document.getElementById('viewport-scale').value = s.viewportScale;
  document.getElementById('line-height').value = s.lineHeight;
  document.getElementById('letter-spacing').value = s.letterSpacing;
  document.querySelectorAll('input[name="method"]').forEach(r => {{
    r.checked = r.value === s.method;
  }});

  document.getElementById('base-font-size-value').textContent = d.display.base_font_size;
  document.getElementById('type-scale-value').textContent = d.display.type_scale;
  document.getElementById('viewport-scale-value').textContent = d.display.viewport_scale;

  document.getElementById('cssOutput').textContent = d.css;
  document.getElementById('mobileSize').textContent = d.breakpoints.mobile.label;
  document.getElementById('tabletSize').textContent = d.breakpoints.tablet.label;
  document.getElementById('desktopSize').textContent = d.breakpoints.desktop.label;

  const root = document.documentElement;
  d.custom_properties.forEach(p => root.style.setProperty(p.name, p.value));

  document.getElementById('inputError').textContent = state.error || '';
}}

// One request in flight at a time. Changes made meanwhile collapse into
// `pending`, so only the newest value is sent next.
let nextSeq = state.seq;
let inFlight = false;
let pending = null;

function sendInput(field, value) {{
  pending = {{ field, value: String(value), seq: ++nextSeq }};
  if (!inFlight) flush();
}}

async function flush() {{
  inFlight = true;
  while (pending) {{
    const req = pending;
    pending = null;
    try {{
      const res = await fetch('/input', {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        body: JSON.stringify(req),
      }});
      if (!res.ok) {{
        document.getElementById('inputError').textContent = await res.text();
        continue;
      }}
      const next = await res.json();
      nextSeq = Math.max(nextSeq, next.seq);
      if (next.seq >= state.seq) render(next);
    }} catch (e) {{
      console.error('fluid-type: input failed', e);
    }}
  }}
  inFlight = false;
}}

document.querySelectorAll('[data-field]').forEach(el => {{
  const eventName = el.tagName === 'SELECT' || el.type === 'radio' ? 'change' : 'input';
  el.addEventListener(eventName, () => sendInput(el.dataset.field, el.value));
}});

const copyBtn = document.getElementById('copyCss');
copyBtn.addEventListener('click', () => {{
  const text = document.getElementById('cssOutput').textContent;
  clearTimeout(copyTimer);
  const done = (cls, label) => {{
    copyBtn.classList.remove('copied', 'failed');
    copyBtn.classList.add(cls);
    copyBtn.textContent = label;
    copyTimer = setTimeout(() => {{
      copyBtn.classList.remove(cls);
      copyBtn.textContent = 'Copy CSS';
    }}, 2000);
  }};
  if (!navigator.clipboard) {{
    console.warn('fluid-type: clipboard unavailable in this context');
    done('failed', 'Copy failed');
    return;
  }}
  navigator.clipboard.writeText(text).then(
    () => done('copied', 'Copied!'),
    err => {{
      console.warn('fluid-type: clipboard write failed', err);
      done('failed', 'Copy failed');
    }},
  );
}});

render(state);
</script>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_state_and_orders_inputs() {
        let js = build_inline_js(r#"{"seq":3}"#);
        assert!(js.contains(r#"let state = {"seq":3};"#));
        assert!(js.contains("let nextSeq = state.seq;"));
        assert!(js.contains("seq: ++nextSeq"));
        assert!(js.contains("if (next.seq >= state.seq) render(next);"));
    }
}
