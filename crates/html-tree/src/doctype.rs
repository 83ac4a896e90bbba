use crate::node::CompatMode;
use crate::token::DoctypeData;

/// Determines the document compatibility mode a DOCTYPE token indicates.
///
/// An appropriate DOCTYPE is one encountered in the "initial" insertion
/// mode, before the HTML element has been opened and before any other
/// DOCTYPE declaration token; the tree constructor applies the result to
/// the document node at that point and never afterwards.
///
/// > If the DOCTYPE token matches one of the conditions in the following
/// > list, then set the Document to quirks mode…
///
/// @see https://html.spec.whatwg.org/#the-initial-insertion-mode
pub(crate) fn indicated_compat_mode(doctype: &DoctypeData) -> CompatMode {
    /*
     * > The force-quirks flag is set to on.
     */
    if doctype.force_quirks {
        return CompatMode::Quirks;
    }

    /*
     * Normative documents contain the literal `<!DOCTYPE html>` with no
     * public or system identifiers; short-circuit to avoid extra work.
     */
    let name_is_html = doctype.name.as_deref() == Some("html");
    if name_is_html
        && doctype.public_identifier.is_none()
        && doctype.system_identifier.is_none()
    {
        return CompatMode::NoQuirks;
    }

    /*
     * > The name is not "html".
     *
     * The tokenizer reports the name in lower case even when the document
     * provided it in upper case; no conversion is required here.
     */
    if !name_is_html {
        return CompatMode::Quirks;
    }

    /*
     * > set…the public identifier…to…the empty string if the public
     * > identifier was missing.
     * >
     * > The system identifier and public identifier strings must be
     * > compared…in an ASCII case-insensitive manner.
     * >
     * > A system identifier whose value is the empty string is not
     * > considered missing for the purposes of the conditions above.
     */
    let system_identifier_is_missing = doctype.system_identifier.is_none();
    let public_identifier = doctype
        .public_identifier
        .as_deref()
        .unwrap_or("")
        .to_ascii_lowercase();
    let system_identifier = doctype
        .system_identifier
        .as_deref()
        .unwrap_or("")
        .to_ascii_lowercase();

    /*
     * > The public identifier is set to…
     */
    if public_identifier == "-//w3o//dtd w3 html strict 3.0//en//"
        || public_identifier == "-/w3c/dtd html 4.0 transitional/en"
        || public_identifier == "html"
    {
        return CompatMode::Quirks;
    }

    /*
     * > The system identifier is set to…
     */
    if system_identifier == "http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd" {
        return CompatMode::Quirks;
    }

    /*
     * > The public identifier starts with…
     */
    static QUIRKS_PUBLIC_ID_PREFIXES: &[&str] = &[
        "+//silmaril//dtd html pro v0r11 19970101//",
        "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
        "-//as//dtd html 3.0 aswedit + extensions//",
        "-//ietf//dtd html 2.0 level 1//",
        "-//ietf//dtd html 2.0 level 2//",
        "-//ietf//dtd html 2.0 strict level 1//",
        "-//ietf//dtd html 2.0 strict level 2//",
        "-//ietf//dtd html 2.0 strict//",
        "-//ietf//dtd html 2.0//",
        "-//ietf//dtd html 2.1e//",
        "-//ietf//dtd html 3.0//",
        "-//ietf//dtd html 3.2 final//",
        "-//ietf//dtd html 3.2//",
        "-//ietf//dtd html 3//",
        "-//ietf//dtd html level 0//",
        "-//ietf//dtd html level 1//",
        "-//ietf//dtd html level 2//",
        "-//ietf//dtd html level 3//",
        "-//ietf//dtd html strict level 0//",
        "-//ietf//dtd html strict level 1//",
        "-//ietf//dtd html strict level 2//",
        "-//ietf//dtd html strict level 3//",
        "-//ietf//dtd html strict//",
        "-//ietf//dtd html//",
        "-//metrius//dtd metrius presentational//",
        "-//microsoft//dtd internet explorer 2.0 html strict//",
        "-//microsoft//dtd internet explorer 2.0 html//",
        "-//microsoft//dtd internet explorer 2.0 tables//",
        "-//microsoft//dtd internet explorer 3.0 html strict//",
        "-//microsoft//dtd internet explorer 3.0 html//",
        "-//microsoft//dtd internet explorer 3.0 tables//",
        "-//netscape comm. corp.//dtd html//",
        "-//netscape comm. corp.//dtd strict html//",
        "-//o'reilly and associates//dtd html 2.0//",
        "-//o'reilly and associates//dtd html extended 1.0//",
        "-//o'reilly and associates//dtd html extended relaxed 1.0//",
        "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
        "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
        "-//spyglass//dtd html 2.0 extended//",
        "-//sq//dtd html 2.0 hotmetal + extensions//",
        "-//sun microsystems corp.//dtd hotjava html//",
        "-//sun microsystems corp.//dtd hotjava strict html//",
        "-//w3c//dtd html 3 1995-03-24//",
        "-//w3c//dtd html 3.2 draft//",
        "-//w3c//dtd html 3.2 final//",
        "-//w3c//dtd html 3.2//",
        "-//w3c//dtd html 3.2s draft//",
        "-//w3c//dtd html 4.0 frameset//",
        "-//w3c//dtd html 4.0 transitional//",
        "-//w3c//dtd html experimental 19960712//",
        "-//w3c//dtd html experimental 970421//",
        "-//w3c//dtd w3 html//",
        "-//w3o//dtd w3 html 3.0//",
        "-//webtechs//dtd mozilla html 2.0//",
        "-//webtechs//dtd mozilla html//",
    ];
    if QUIRKS_PUBLIC_ID_PREFIXES
        .iter()
        .any(|prefix| public_identifier.starts_with(prefix))
    {
        return CompatMode::Quirks;
    }

    /*
     * > The system identifier is missing and the public identifier starts
     * > with…
     */
    if system_identifier_is_missing
        && (public_identifier.starts_with("-//w3c//dtd html 4.01 frameset//")
            || public_identifier.starts_with("-//w3c//dtd html 4.01 transitional//"))
    {
        return CompatMode::Quirks;
    }

    /*
     * > Otherwise, if the DOCTYPE token matches one of the conditions in
     * > the following list, then set the Document to limited-quirks mode.
     */

    /*
     * > The public identifier starts with…
     */
    if public_identifier.starts_with("-//w3c//dtd xhtml 1.0 frameset//")
        || public_identifier.starts_with("-//w3c//dtd xhtml 1.0 transitional//")
    {
        return CompatMode::LimitedQuirks;
    }

    /*
     * > The system identifier is not missing and the public identifier
     * > starts with…
     */
    if !system_identifier_is_missing
        && (public_identifier.starts_with("-//w3c//dtd html 4.01 frameset//")
            || public_identifier.starts_with("-//w3c//dtd html 4.01 transitional//"))
    {
        return CompatMode::LimitedQuirks;
    }

    CompatMode::NoQuirks
}

#[cfg(test)]
mod test {
    use super::*;

    fn doctype(
        name: Option<&str>,
        public_identifier: Option<&str>,
        system_identifier: Option<&str>,
        force_quirks: bool,
    ) -> DoctypeData {
        DoctypeData {
            name: name.map(Into::into),
            public_identifier: public_identifier.map(Into::into),
            system_identifier: system_identifier.map(Into::into),
            force_quirks,
        }
    }

    macro_rules! test_compat_mode {
        ($($case:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $case() {
                let (name, public_id, system_id, force_quirks, expected):
                    (Option<&str>, Option<&str>, Option<&str>, bool, CompatMode) = $value;
                let token = doctype(name, public_id, system_id, force_quirks);
                assert_eq!(
                    indicated_compat_mode(&token),
                    expected,
                    "wrong compatibility mode for {:?}",
                    token
                );
            }
        )*
        }
    }

    test_compat_mode! {
        html5_doctype:               ( Some("html"), None, None, false, CompatMode::NoQuirks ),
        force_quirks_flag:           ( Some("html"), None, None, true,  CompatMode::Quirks ),
        missing_name:                ( None, None, None, false, CompatMode::Quirks ),
        non_html_name:               ( Some("svg"), None, None, false, CompatMode::Quirks ),
        html4_strict_is_standard:    ( Some("html"), Some("-//W3C//DTD HTML 4.01//EN"), Some("http://www.w3.org/TR/html4/strict.dtd"), false, CompatMode::NoQuirks ),
        html32_is_quirks:            ( Some("html"), Some("-//W3C//DTD HTML 3.2 Final//EN"), None, false, CompatMode::Quirks ),
        legacy_compat_public_html:   ( Some("html"), Some("HTML"), None, false, CompatMode::Quirks ),
        ibm_system_id_is_quirks:     ( Some("html"), None, Some("http://www.IBM.com/data/dtd/v11/ibmxhtml1-transitional.dtd"), false, CompatMode::Quirks ),
        html401_frameset_no_system:  ( Some("html"), Some("-//W3C//DTD HTML 4.01 Frameset//EN"), None, false, CompatMode::Quirks ),
        html401_frameset_w_system:   ( Some("html"), Some("-//W3C//DTD HTML 4.01 Frameset//EN"), Some(""), false, CompatMode::LimitedQuirks ),
        xhtml_transitional_limited:  ( Some("html"), Some("-//W3C//DTD XHTML 1.0 Transitional//EN"), None, false, CompatMode::LimitedQuirks ),
        empty_public_id_is_standard: ( Some("html"), Some(""), Some(""), false, CompatMode::NoQuirks ),
    }
}
