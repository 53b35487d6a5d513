//! Integration tests for texmark rendering

use texmark::{render, MatrixKind, RenderOptions, Renderer, EMPTY_PLACEHOLDER};

// ============================================================================
// Argument-taking commands
// ============================================================================

mod commands {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARGUMENTS: &[&str] = &["x", "a+b", "x{y}", "AB"];

    #[test]
    fn test_single_argument_wrappers_keep_content() {
        let commands = [
            ("overline", "<span class=\"overline\">"),
            ("underline", "<span class=\"underline\">"),
            ("hat", "<span class=\"hat\">"),
            ("tilde", "<span class=\"tilde\">"),
            ("vec", "<span class=\"vec\">"),
            ("dot", "<span class=\"dot\">"),
            ("ddot", "<span class=\"ddot\">"),
            ("sqrt", "<span class=\"radicand\">"),
        ];
        for (cmd, open) in commands {
            for arg in ARGUMENTS {
                let out = render(format!("\\{}{{{}}}", cmd, arg).as_str());
                let expected = format!("{}{}</span>", open, arg);
                assert!(out.contains(&expected), "\\{}{{{}}} -> {}", cmd, arg, out);
            }
        }
    }

    #[test]
    fn test_nested_fraction_is_not_truncated() {
        let out = render(r"\frac{\frac{a}{b}}{c}");
        assert_eq!(
            out,
            "<p><span class=\"frac\"><span class=\"num\">\
             <span class=\"frac\"><span class=\"num\">a</span><span class=\"den\">b</span></span>\
             </span><span class=\"den\">c</span></span></p>"
        );
    }

    #[test]
    fn test_fraction_example() {
        let out = render(r"\frac{1}{2}");
        assert!(out.contains(
            "<span class=\"frac\"><span class=\"num\">1</span><span class=\"den\">2</span></span>"
        ));
    }

    #[test]
    fn test_fraction_spellings_agree() {
        assert_eq!(render(r"\dfrac{x}{y}"), render(r"\frac{x}{y}"));
    }
}

// ============================================================================
// Matrices
// ============================================================================

mod matrices {
    use super::*;
    use pretty_assertions::assert_eq;

    const KINDS: &[MatrixKind] = &[
        MatrixKind::Paren,
        MatrixKind::Bracket,
        MatrixKind::Plain,
        MatrixKind::Bar,
        MatrixKind::DoubleBar,
    ];

    #[test]
    fn test_rows_and_cells_for_every_kind() {
        for kind in KINDS {
            let name = kind.env_name();
            for rows in 1..=3 {
                for cols in 1..=3 {
                    let body: Vec<String> = (0..rows)
                        .map(|r| {
                            (0..cols)
                                .map(|c| format!("c{}{}", r, c))
                                .collect::<Vec<_>>()
                                .join(" & ")
                        })
                        .collect();
                    let input = format!(
                        "\\begin{{{}}} {} \\end{{{}}}",
                        name,
                        body.join(" \\\\ "),
                        name
                    );
                    let out = render(input.as_str());

                    assert!(out.contains(&format!("<table class=\"matrix {}\">", name)));
                    assert_eq!(out.matches("<tr>").count(), rows, "{}", out);
                    assert_eq!(out.matches("<td>").count(), rows * cols, "{}", out);
                    for r in 0..rows {
                        let row: String = (0..cols)
                            .map(|c| format!("<td>c{}{}</td>", r, c))
                            .collect();
                        assert!(out.contains(&format!("<tr>{}</tr>", row)), "{}", out);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pmatrix_example() {
        let out = render(r"\begin{pmatrix} 1 & 2 \\ 3 & 4 \end{pmatrix}");
        assert!(out.contains(
            "<table class=\"matrix pmatrix\"><tr><td>1</td><td>2</td></tr>\
             <tr><td>3</td><td>4</td></tr></table>"
        ));
    }

    #[test]
    fn test_matrix_cells_are_rendered() {
        let out = render(r"$\begin{bmatrix} \alpha & \frac{1}{2} \end{bmatrix}$");
        assert!(out.contains("<td>α</td>"), "{}", out);
        assert!(out.contains("<td><span class=\"frac\">"), "{}", out);
    }
}

// ============================================================================
// Symbols
// ============================================================================

mod symbols {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefix_commands_in_isolation() {
        for (input, glyph) in [
            (r"$\in$", "∈"),
            (r"$\int$", "∫"),
            (r"$\infty$", "∞"),
            (r"$\pi$", "π"),
            (r"$\pitchfork$", "⋔"),
            (r"$\le$", "≤"),
            (r"$\leq$", "≤"),
        ] {
            assert_eq!(
                render(input),
                format!("<p><span class=\"math-inline\">{}</span></p>", glyph)
            );
        }
    }

    #[test]
    fn test_prefix_commands_adjacent() {
        let out = render(r"$\in \int \infty \pi\pitchfork$");
        assert!(out.contains("∈ ∫ ∞ π⋔"), "{}", out);
        assert!(!out.contains("nt"));
        assert!(!out.contains("fty"));
        assert!(!out.contains("tchfork"));
    }

    #[test]
    fn test_greek_alphabet_sample() {
        let out = render(r"$\alpha\beta\gamma\delta\epsilon\theta\lambda\mu\sigma\omega$");
        assert!(out.contains("αβγδϵθλμσω"), "{}", out);
        let out = render(r"$\Gamma\Delta\Theta\Lambda\Sigma\Phi\Psi\Omega$");
        assert!(out.contains("ΓΔΘΛΣΦΨΩ"), "{}", out);
    }

    #[test]
    fn test_operators_relations_arrows() {
        let out = render(r"$a \times b \leq c \Rightarrow d \neq e \to f$");
        assert!(out.contains("a × b ≤ c ⇒ d ≠ e → f"), "{}", out);
    }

    #[test]
    fn test_null_delimiters_leave_nothing() {
        assert_eq!(
            render(r"$\left. x \right|$"),
            "<p><span class=\"math-inline\"> x |</span></p>"
        );
    }

    #[test]
    fn test_functions_are_tagged() {
        let out = render(r"$\lim_{x \to 0} \frac{\sin x}{x} = 1$");
        assert!(out.contains("<span class=\"fn\">lim</span><sub>x → 0</sub>"), "{}", out);
        assert!(out.contains("<span class=\"fn\">sin</span> x"), "{}", out);
    }

    #[test]
    fn test_delimiter_sizing_is_dropped() {
        let out = render(r"$\left( \frac{a}{b} \right)$");
        assert!(out.starts_with("<p><span class=\"math-inline\">( <span class=\"frac\">"));
        assert!(out.ends_with("</span> )</span></p>"), "{}", out);
    }
}

// ============================================================================
// Math delimiters
// ============================================================================

mod delimiters {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_example() {
        let out = render("Energy: $E = mc^2$");
        assert!(out.contains("<span class=\"math-inline\">E = mc<sup>2</sup></span>"));
    }

    #[test]
    fn test_double_dollar_is_one_display_block() {
        let out = render("We have $$a + b$$ here.");
        assert_eq!(out.matches("<div class=\"math-display\">").count(), 1);
        assert!(!out.contains("math-inline"));
        assert!(out.contains("<div class=\"math-display\">a + b</div>"));
    }

    #[test]
    fn test_mixed_display_and_inline() {
        let out = render(r"Let $x$ be given. \[x^{2} \geq 0\] Also \(y\).");
        assert_eq!(
            out,
            "<p>Let <span class=\"math-inline\">x</span> be given.</p>\
             <div class=\"math-display\">x<sup>2</sup> ≥ 0</div>\
             <p>Also <span class=\"math-inline\">y</span>.</p>"
        );
    }

    #[test]
    fn test_stars_in_math_are_not_emphasis() {
        assert_eq!(
            render("$2*3*4$"),
            "<p><span class=\"math-inline\">2*3*4</span></p>"
        );
        assert_eq!(
            render("*f* is $f*g*h$"),
            "<p><em>f</em> is <span class=\"math-inline\">f*g*h</span></p>"
        );
        let out = render("$$a*b*c$$");
        assert!(out.contains("<div class=\"math-display\">a*b*c</div>"), "{}", out);
    }

    #[test]
    fn test_unterminated_is_literal() {
        assert_eq!(render("price: $5"), "<p>price: $5</p>");
        assert_eq!(render(r"\[ x"), r"<p>\[ x</p>");
    }
}

// ============================================================================
// Block structure
// ============================================================================

mod blocks {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_example() {
        let out = render("## Title\nSome text");
        assert_eq!(out, "<h2>Title</h2><p>Some text</p>");
    }

    #[test]
    fn test_three_heading_levels() {
        let out = render("# A\n## B\n### C");
        assert_eq!(out, "<h1>A</h1><h2>B</h2><h3>C</h3><p></p>");
    }

    #[test]
    fn test_heading_alone_reopens_paragraph() {
        let out = render("## Title");
        assert!(out.contains("<h2>Title</h2><p>"), "{}", out);
        assert!(out.ends_with("</p>"));
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(render("one\r\n\r\ntwo"), "<p>one</p><p>two</p>");
        assert_eq!(
            render("- a\r\n- b\r\n\r\nafter"),
            "<ul><li>a</li><li>b</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_paragraphs_and_breaks() {
        assert_eq!(render("one\n\ntwo"), "<p>one</p><p>two</p>");
        assert_eq!(render(r"line \\ next"), "<p>line <br> next</p>");
    }

    #[test]
    fn test_lists_with_math() {
        let out = render("- $\\alpha$\n- **b**");
        assert_eq!(
            out,
            "<ul><li><span class=\"math-inline\">α</span></li><li><strong>b</strong></li></ul>"
        );
    }
}

// ============================================================================
// Degenerate input and options
// ============================================================================

mod input_handling {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_null_input() {
        assert_eq!(render(""), EMPTY_PLACEHOLDER);
        assert_eq!(render(" \n \t"), EMPTY_PLACEHOLDER);
        assert_eq!(render(None::<&str>), EMPTY_PLACEHOLDER);
        let missing: Option<String> = None;
        assert_eq!(render(missing.as_deref()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_private_use_input_is_kept() {
        assert_eq!(render("a\u{E000}b"), "<p>a&#xE000;b</p>");
        assert_eq!(render("x\u{E002}y"), "<p>x&#xE002;y</p>");
    }

    #[test]
    fn test_renderer_is_shareable_across_threads() {
        let renderer = std::sync::Arc::new(Renderer::new(RenderOptions::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let renderer = renderer.clone();
                std::thread::spawn(move || renderer.render(format!("$x^{}$", i).as_str()))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let out = handle.join().unwrap();
            assert!(out.contains(&format!("x<sup>{}</sup>", i)));
        }
    }

    #[test]
    fn test_malformed_input_never_panics() {
        for input in [
            r"\frac{",
            r"\frac{a}{",
            r"\sqrt[",
            r"\begin{pmatrix}",
            r"\end{pmatrix}",
            "$$",
            "$",
            r"\",
            "^",
            "_{",
            "{{{}}",
            "**",
            "é\\ü$ö$",
        ] {
            let _ = render(input);
        }
    }
}
