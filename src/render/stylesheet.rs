//! Embedded stylesheet

/// Dark theme with flex rows. Width classes are multiples of the 42px base key plus gaps.
pub const STYLESHEET: &str = r#"
    body { font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; background:#111; color:#ddd; }
    .wrap { display:flex; flex-direction:column; gap:28px; padding:24px; }
    .layer { background:#1a1a1a; border:1px solid #333; border-radius:10px; padding:16px; box-shadow: 0 2px 8px rgba(0,0,0,0.3); }
    .layer-name { font-weight:600; margin-bottom:10px; letter-spacing:0.5px; }
    .row { display:flex; gap:8px; margin:6px 0; }
    .key { min-width:42px; height:42px; display:flex; align-items:center; justify-content:center; background:#222; border:1px solid #444; border-radius:6px; font-size:14px; }
    .key.w125 { min-width:55px; }
    .key.w15 { min-width:67px; }
    .key.w175 { min-width:80px; }
    .key.w2 { min-width:92px; }
    .key.w225 { min-width:105px; }
    .key.w275 { min-width:130px; }
    .key.wide2 { min-width:110px; }
    .trans { opacity:0.2; }
"#;
