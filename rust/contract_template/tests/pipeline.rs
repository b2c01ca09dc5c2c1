use contract_template::render::render_body;
use contract_template::{
    convert, extract_fragments, render_document, ConvertOptions, Fragment, FragmentKind,
    FragmentOrder, RenderOptions,
};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use proptest::prelude::*;

fn word_export(body: &str) -> String {
    format!(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\">\n<head>\
         <meta http-equiv=Content-Type content=\"text/html; charset=windows-1252\">\
         <style>p.MsoNormal {{margin:0cm;}}</style></head>\n\
         <body lang=PT-BR style='tab-interval:35.4pt'>\n<div class=WordSection1>\n{body}\n</div>\n</body>\n</html>"
    )
}

fn positional() -> ConvertOptions {
    ConvertOptions {
        order: FragmentOrder::Positional,
        ..ConvertOptions::default()
    }
}

fn count_elements(html: &str, tag: &str) -> usize {
    fn walk(node: &Handle, tag: &str, count: &mut usize) {
        if let NodeData::Element { name, .. } = &node.data {
            if name.local.to_string().eq_ignore_ascii_case(tag) {
                *count += 1;
            }
        }
        for child in node.children.borrow().iter() {
            walk(child, tag, count);
        }
    }
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let mut count = 0;
    walk(&dom.document, tag, &mut count);
    count
}

#[test]
fn document_without_body_is_bare_template() {
    let out = convert("<html><head><title>x</title></head></html>", &ConvertOptions::default());
    assert_eq!(out.fragment_count, 0);
    assert_eq!(out.html, render_document(&[], &RenderOptions::default()));
    assert_eq!(count_elements(&out.html, "h2"), 0);
}

#[test]
fn numbered_paragraph_renders_as_heading() {
    let out = convert(&word_export("<p class=MsoNormal>1. Introdução</p>"), &positional());
    assert!(out.html.contains("<h2>1. Introdução</h2>"));
}

#[test]
fn paragrafo_unico_renders_unindented_and_emphasized() {
    let out = convert(
        &word_export("<p class=MsoNormal><b>PARÁGRAFO ÚNICO.</b> Texto.</p>"),
        &positional(),
    );
    assert!(out
        .html
        .contains("<p class=\"paragrafo-unico\">PARÁGRAFO ÚNICO. Texto.</p>"));
}

#[test]
fn double_encoded_text_is_repaired() {
    let out = convert(
        &word_export("<p class=MsoNormal>Contrato de intermediaÃ§Ã£o</p>"),
        &positional(),
    );
    assert!(out.html.contains("<p>Contrato de intermediação</p>"));
    assert!(!out.html.contains("Ã§"));
}

#[test]
fn list_run_is_grouped_and_closed_before_paragraph() {
    let out = convert(
        &word_export("<li>Item A</li><li>Item B</li><p>Depois.</p>"),
        &positional(),
    );
    assert!(out.html.contains(
        "    <ul>\n        <li>Item A</li>\n        <li>Item B</li>\n    </ul>\n    <p>Depois.</p>\n"
    ));
    assert_eq!(count_elements(&out.html, "ul"), 1);
    assert_eq!(count_elements(&out.html, "li"), 2);
}

#[test]
fn legacy_order_emits_paragraph_pass_before_list_pass() {
    let frags = extract_fragments(
        &word_export("<li>Item A</li><li>Item B</li><p>Depois.</p>"),
        FragmentOrder::Legacy,
    );
    let kinds: Vec<FragmentKind> = frags.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![FragmentKind::Paragraph, FragmentKind::ListItem, FragmentKind::ListItem]
    );
}

#[test]
fn each_source_table_yields_one_clean_table() {
    let body = "<table class=MsoTableGrid border=1 cellpadding=0 width=604 style='border-collapse:collapse'>\
                <tr><td width=302 valign=top colspan=2><p class=MsoNormal>Parte</p></td></tr></table>\
                <p class=MsoNormal>Entre tabelas</p>\
                <table class=MsoNormalTable><tr><td align=center>Valor</td><td>{{valor}}</td></tr></table>";
    let out = convert(&word_export(body), &positional());
    assert_eq!(count_elements(&out.html, "table"), 2);
    assert!(out
        .html
        .contains("<table border=1 cellpadding=0><tr><td colspan=2>Parte</td></tr></table>"));
    assert!(out.html.contains("<table><tr><td>Valor</td><td>{{valor}}</td></tr></table>"));
    assert!(!out.html.contains("MsoTableGrid"));
    assert!(!out.html.contains("width="));
    assert!(!out.html.contains("valign="));
}

#[test]
fn word_noise_never_reaches_output() {
    let body = "<!--[if gte mso 9]><xml><w:WordDocument>x</w:WordDocument></xml><![endif]-->\
                <script>var x = 1;</script>\
                <p class=MsoNormal style='mso-list:l0 level1 lfo1' o:spt=\"75\">Cláusula com <span style='mso-bidi-font-weight:bold'>negrito</span><o:p></o:p></p>";
    let out = convert(&word_export(body), &positional());
    assert!(out.html.contains("<p>Cláusula com negrito</p>"));
    assert!(!out.html.contains("WordDocument"));
    assert!(!out.html.contains("var x"));
    assert!(!out.html.contains("mso-"));
}

#[test]
fn latin1_references_render_as_characters() {
    let body = "<p class=MsoNormal>Valor &times; fim</p>\
                <p class=MsoNormal>&frac12; sal&aacute;rio &plusmn; 10 m&sup2;&nbsp&copy</p>";
    let out = convert(&word_export(body), &positional());
    assert!(out.html.contains("<p>Valor × fim</p>"));
    assert!(out.html.contains("<p>½ salário ± 10 m² ©</p>"));
    assert!(!out.html.contains("&amp;"));
}

#[test]
fn unclosed_list_item_never_becomes_a_fragment() {
    let frags = extract_fragments(
        &word_export("<ul><li>Sem fechamento</ul><p>Depois texto</p>"),
        FragmentOrder::Legacy,
    );
    assert_eq!(frags, vec![Fragment::new(FragmentKind::Paragraph, "Depois texto")]);
}

#[test]
fn numbered_container_text_reads_back_as_heading() {
    let source = word_export("<div>1. Texto solto longo num div qualquer</div>");
    let first = extract_fragments(&source, FragmentOrder::Positional);
    assert_eq!(first[0].kind, FragmentKind::Paragraph);

    let rendered = render_document(&first, &RenderOptions::default());
    let second = extract_fragments(&rendered, FragmentOrder::Positional);
    assert_eq!(second[0].kind, FragmentKind::Heading);
    assert_eq!(second[0].content, first[0].content);
}

#[test]
fn clean_output_round_trips_its_classification() {
    let body = "<h1>CONTRATO DE PARCERIA</h1>\
                <p class=MsoNormal>Pelo presente instrumento, {{nomePsicologo}}, CPF {{cpf}}:</p>\
                <p class=MsoNormal>1. Do objeto</p>\
                <p class=MsoNormal>PARÁGRAFO PRIMEIRO. A &amp; B &lt;ajuste&gt;.</p>\
                <ul><li>Atendimento online</li><li>Agenda compartilhada</li></ul>\
                <p class=MsoNormal>E, por estarem de acordo, assinam.</p>";
    let first = extract_fragments(&word_export(body), FragmentOrder::Positional);
    let rendered = render_document(&first, &RenderOptions::default());
    let second = extract_fragments(&rendered, FragmentOrder::Positional);

    assert_eq!(first.len(), 7);
    assert!(second.len() >= first.len());
    assert_eq!(&second[..first.len()], &first[..]);
}

fn placeholder_token() -> impl Strategy<Value = String> {
    "campo_[a-z0-9]{1,12}"
}

fn filler() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.]{0,20}"
}

proptest! {
    #[test]
    fn placeholders_survive_with_one_marker(
        token in placeholder_token(),
        before in filler(),
        after in filler(),
    ) {
        let body = format!("<p class=MsoNormal>Texto {before}<span lang=PT-BR>{{{{{token}}}}}</span>{after}</p>");
        let out = convert(&word_export(&body), &positional());
        let bare = format!("{{{{{token}}}}}");
        let marked = format!("<span class=\"variavel\">{bare}</span>");
        prop_assert_eq!(out.html.matches(&bare).count(), 1);
        prop_assert_eq!(out.html.matches(&marked).count(), 1);
    }

    #[test]
    fn one_grouping_per_list_run(pattern in prop::collection::vec(any::<bool>(), 0..24)) {
        let fragments: Vec<Fragment> = pattern
            .iter()
            .enumerate()
            .map(|(i, &is_item)| {
                if is_item {
                    Fragment::new(FragmentKind::ListItem, format!("Item {i}"))
                } else {
                    Fragment::new(FragmentKind::Paragraph, format!("Texto {i}"))
                }
            })
            .collect();
        let runs = pattern
            .iter()
            .enumerate()
            .filter(|&(i, &is_item)| is_item && (i == 0 || !pattern[i - 1]))
            .count();
        let items = pattern.iter().filter(|&&is_item| is_item).count();

        let body = render_body(&fragments);
        prop_assert_eq!(body.matches("<ul>").count(), runs);
        prop_assert_eq!(body.matches("</ul>").count(), runs);
        prop_assert!(!body.contains("</ul>\n    <ul>"));

        let document = render_document(&fragments, &RenderOptions::default());
        prop_assert_eq!(count_elements(&document, "ul"), runs);
        prop_assert_eq!(count_elements(&document, "li"), items);
    }
}
