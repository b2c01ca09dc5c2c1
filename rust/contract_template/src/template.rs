use crate::entities::escape_text;

pub const DEFAULT_TITLE: &str = "Contrato de Parceria e Intermediação - Psicólogo";

/// Print stylesheet: A4, 3cm/3cm/2cm/3cm margins, Times New Roman 12pt, 1.5 leading,
/// 1.25cm first-line indent.
pub fn stylesheet() -> &'static str {
    r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        @page {
            size: A4;
            margin: 3cm 3cm 2cm 3cm;
        }

        body {
            font-family: 'Times New Roman', Times, serif;
            font-size: 12pt;
            line-height: 1.5;
            color: #000;
            background: #fff;
            max-width: 21cm;
            margin: 0 auto;
            padding: 3cm 3cm 2cm 3cm;
            text-align: justify;
            hyphens: auto;
        }

        h1 {
            font-size: 14pt;
            font-weight: bold;
            text-align: center;
            text-transform: uppercase;
            margin: 24pt 0 12pt 0;
            page-break-after: avoid;
        }

        h2 {
            font-size: 12pt;
            font-weight: bold;
            margin: 18pt 0 6pt 0;
            page-break-after: avoid;
        }

        h3 {
            font-size: 12pt;
            font-weight: bold;
            font-style: italic;
            margin: 12pt 0 6pt 0;
        }

        p {
            margin: 6pt 0;
            text-indent: 1.25cm;
        }

        p.sem-recuo {
            text-indent: 0;
        }

        p.paragrafo-unico {
            font-weight: bold;
            text-indent: 0;
            margin-top: 6pt;
        }

        ul, ol {
            margin: 6pt 0 6pt 1.25cm;
            padding-left: 1.25cm;
        }

        li {
            margin: 3pt 0;
            text-align: justify;
        }

        strong, b {
            font-weight: bold;
        }

        em, i {
            font-style: italic;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            margin: 12pt 0;
            page-break-inside: avoid;
            font-size: 11pt;
        }

        th, td {
            border: 1pt solid #000;
            padding: 6pt 8pt;
            text-align: left;
            vertical-align: top;
        }

        th {
            background-color: #f5f5f5;
            font-weight: bold;
            text-align: center;
        }

        tr:nth-child(even) {
            background-color: #fafafa;
        }

        .assinaturas {
            margin-top: 48pt;
            page-break-inside: avoid;
        }

        .assinatura {
            margin: 24pt 0;
            text-align: center;
        }

        .linha-assinatura {
            border-top: 1pt solid #000;
            width: 60%;
            margin: 0 auto 6pt auto;
        }

        .data-assinatura {
            text-align: right;
            margin: 24pt 0;
        }

        .variavel {
            background-color: #ffffcc;
            padding: 0 2pt;
            font-family: 'Courier New', monospace;
        }

        .quebra-pagina {
            page-break-before: always;
        }

        @media print {
            body {
                padding: 0;
                max-width: 100%;
            }

            .variavel {
                background-color: transparent;
            }
        }

        .cabecalho {
            text-align: center;
            margin-bottom: 24pt;
        }

        .qualificacao {
            margin: 12pt 0;
        }

        .qualificacao p {
            text-indent: 0;
        }
"#
}

/// Everything up to and including the opening `<body>` tag.
pub fn preamble(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
{}    </style>
</head>
<body>
"#,
        escape_text(title),
        stylesheet()
    )
}

/// Date line and both signature blocks. Placeholders stay unresolved.
pub fn signature_block() -> &'static str {
    r#"
    <div class="assinaturas">
        <div class="data-assinatura">
            <p class="sem-recuo">Barueri, <span class="variavel">{{diaAssinatura}}</span> de <span class="variavel">{{mesAssinatura}}</span> de <span class="variavel">{{anoAssinatura}}</span>.</p>
        </div>

        <div class="assinatura">
            <p class="sem-recuo"><strong>INTERMEDIADOR:</strong></p>
            <div class="linha-assinatura"></div>
            <p class="sem-recuo"><span class="variavel">{{assinaturaIntermediador}}</span></p>
            <p class="sem-recuo">MINDFLUENCE PSICOLOGIA LTDA.</p>
        </div>

        <div class="assinatura">
            <p class="sem-recuo"><strong>PSICÓLOGO(A) PESSOA FÍSICA / PESSOA JURÍDICA:</strong></p>
            <div class="linha-assinatura"></div>
            <p class="sem-recuo"><span class="variavel">{{assinaturaPsicologo}}</span></p>
        </div>
    </div>
"#
}

pub fn closing() -> &'static str {
    "\n</body>\n</html>\n"
}
