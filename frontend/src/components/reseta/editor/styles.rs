// Stylesheet injected once by the editor root view.

pub const STYLE_SHEET: &str = r#"
.reseta-editor-root {
    font-family: Arial, sans-serif;
    color: #263238;
    padding: 12px;
}
.icon-toolbar {
    display: flex;
    align-items: center;
    gap: 4px;
    margin-bottom: 8px;
}
.icon-btn {
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    padding: 6px 10px;
    background: #fff;
    border: 1px solid #cfd8dc;
    border-radius: 4px;
    cursor: pointer;
    font-size: 11px;
}
.icon-btn:hover { background: #eceff1; }
.icon-btn.wide { padding: 6px 16px; }
.icon-btn .icon-label { margin-top: 2px; }
.dirty-dot {
    width: 8px;
    height: 8px;
    margin-left: 6px;
    background: #e53935;
    border-radius: 50%;
    display: inline-block;
}
.editor-layout {
    display: flex;
    align-items: flex-start;
    gap: 16px;
}
.editor-panels { flex: 1 1 0; min-width: 320px; }
.tab-bar {
    display: flex;
    gap: 2px;
    border-bottom: 1px solid #cfd8dc;
    margin-bottom: 10px;
}
.tab-btn {
    padding: 8px 12px;
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    cursor: pointer;
    font-size: 13px;
}
.tab-btn.active { border-bottom-color: #1a5276; font-weight: bold; }
.panel { display: flex; flex-direction: column; gap: 10px; }
.field-row { display: flex; flex-direction: column; }
.field-label { font-size: 12px; margin-bottom: 2px; }
.required-mark { color: #e53935; margin-left: 2px; }
.field-input {
    padding: 6px 8px;
    border: 1px solid #cfd8dc;
    border-radius: 4px;
    font-size: 13px;
}
.field-input.invalid { border-color: #e53935; outline-color: #e53935; }
.field-error { color: #e53935; font-size: 11px; margin-top: 2px; }
.color-row { flex-direction: row; align-items: center; gap: 8px; }
.color-row .field-label { flex: 0 0 110px; margin-bottom: 0; }
.color-swatch-input {
    width: 36px;
    height: 28px;
    padding: 0;
    border: 1px solid #cfd8dc;
    border-radius: 4px;
    cursor: pointer;
}
.color-text-input { flex: 1 1 auto; }
.check-row { display: flex; align-items: center; gap: 8px; }
.check-row .field-label { margin-bottom: 0; }
.hours-row { flex-direction: row; align-items: center; gap: 8px; }
.hours-row .field-label { flex: 0 0 90px; margin-bottom: 0; }
.hours-row .field-input { flex: 1 1 auto; }

.reseta-paper {
    width: 13.97cm;
    min-height: 21.59cm;
    padding: 12mm;
    box-shadow: 0 0 8px #ccc;
    box-sizing: border-box;
    display: flex;
    flex-direction: column;
    font-size: 12px;
}
.reseta-header { text-align: center; }
.clinic-name { font-size: 18px; font-weight: bold; }
.doctor-line { font-size: 14px; margin-top: 2px; }
.specialty-line { font-style: italic; }
.reseta-contact {
    display: flex;
    justify-content: space-between;
    margin-top: 10px;
    padding-top: 6px;
    border-top: 1px solid #90a4ae;
}
.contact-column { display: flex; flex-direction: column; gap: 1px; }
.contact-column:last-child { text-align: right; }
.reseta-hours { margin-top: 8px; }
.hours-heading { font-weight: bold; }
.rx-symbol { font-size: 34px; line-height: 1; }
.reseta-body { flex: 1 1 auto; margin-top: 12px; }
.body-placeholder { height: 9cm; }
.reseta-footer {
    margin-top: 10px;
    padding-top: 6px;
    border-top: 1px solid #90a4ae;
    align-self: flex-end;
    text-align: center;
}
.signature-image {
    max-height: 48px;
    max-width: 160px;
    display: block;
    margin: 0 auto -4px;
    mix-blend-mode: multiply;
}
.footer-identity { font-weight: bold; }
"#;
