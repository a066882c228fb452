//! Template Generator - Record In, Document Out
//!
//! `render` is pure and total: it runs on every edit and never fails.
//! Optional sections take their CSS and script with them when hidden.

use crate::color::{hex_to_rgb, is_valid_hex, lighten};
use crate::config::EventConfig;
use crate::escape::{display_title, escape_html as esc};

const FONT_LINK: &str = r#"<link href="https://fonts.googleapis.com/css2?family=Noto+Serif+JP:wght@200;400;700;900&family=DM+Sans:wght@0,400;0,500;0,600;0,700&display=swap" rel="stylesheet">"#;

/// Colors computed once per render
struct Derived {
    accent_glow: String,
    gold_light: String,
    accent_rgb: String,
    gold_rgb: String,
}

impl Derived {
    fn from_config(c: &EventConfig) -> Self {
        Self {
            accent_glow: lighten(&c.colors.accent, 20.0),
            gold_light: lighten(&c.colors.gold, 25.0),
            accent_rgb: hex_to_rgb(&c.colors.accent).css_triple(),
            gold_rgb: hex_to_rgb(&c.colors.gold).css_triple(),
        }
    }
}

// Deterministic push-order writer
struct Page {
    buf: String,
}

impl Page {
    fn new() -> Self {
        Self { buf: String::with_capacity(32 * 1024) }
    }

    fn push(&mut self, s: impl AsRef<str>) {
        self.buf.push_str(s.as_ref());
    }

    fn line(&mut self, s: impl AsRef<str>) {
        self.push(s);
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render the complete event page.
pub fn render(c: &EventConfig) -> String {
    let d = Derived::from_config(c);
    let s = &c.sections;
    let mut w = Page::new();

    w.line("<!DOCTYPE html>");
    w.line(r#"<html lang="en">"#);
    w.line("<head>");
    w.line(r#"<meta charset="UTF-8">"#);
    w.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
    w.line(format!("<title>Johnson Japan Club — {}</title>", esc(&c.event_name_jp)));
    w.line(FONT_LINK);
    w.line("<style>");
    w.line(root_css(c, &d));
    w.line(BASE_CSS);
    if s.preloader {
        w.line(PRELOADER_CSS);
    }
    w.line(HERO_CSS);
    w.line(orb_css(&d));
    if s.kanji {
        w.line(kanji_css(&d));
    }
    w.line(".hero-content{position:relative;z-index:2}");
    w.line(badge_css(&d));
    w.line(HERO_TEXT_CSS);
    if s.transition {
        w.line(TRANSITION_CSS);
    }
    w.line(DETAILS_CSS);
    if s.experience {
        w.line(experience_css(&d));
    }
    if s.inclusions {
        w.line(INCLUSIONS_CSS);
    }
    if s.quote {
        w.line(INTERLUDE_CSS);
    }
    w.line(PRICING_CSS);
    w.line(cta_css(&d));
    w.line(CLOSING_CSS);
    w.line(media_css(c));
    w.line("</style>");
    w.line("</head>");
    w.line("<body>");

    if s.preloader {
        w.line(PRELOADER_MARKUP);
    }
    w.line(HERO_OPEN);
    if s.kanji {
        w.line(KANJI_MARKUP);
    }
    w.line(hero_content(c));
    if s.transition {
        w.line(transition_markup(c));
    }
    w.line(details_markup(c));
    if s.experience {
        w.line(experience_markup(c));
    }
    if s.inclusions {
        w.line(inclusions_markup(c));
    }
    if s.quote {
        w.line(quote_markup(c));
    }
    w.line(pricing_markup(c));
    w.line(FOOTER_MARKUP);

    w.line("<script>");
    w.line(if s.preloader { PRELOADER_SCRIPT } else { HERO_ENTER_SCRIPT });
    w.line(REVEAL_SCRIPT);
    if s.kanji {
        w.line(PARALLAX_SCRIPT);
    }
    w.line("</script>");
    w.push("</body></html>");

    tracing::debug!(event = %c.event_name_en, bytes = w.buf.len(), "Rendered event page");
    w.finish()
}

/// Theme colors always reach CSS as normalized `#rrggbb`; malformed ones as black.
fn css_color(value: &str) -> String {
    if !is_valid_hex(value) {
        tracing::debug!(value, "Malformed theme color rendered as black");
    }
    hex_to_rgb(value).to_hex()
}

// --- Style ---

fn root_css(c: &EventConfig, d: &Derived) -> String {
    format!(
        ":root{{--ink:{ink};--paper:{paper};--accent:{accent};--accent-glow:{glow};--gold:{gold};--gold-light:{gold_light};--subtle:#8a8275;--divider:#d4cec3;--dark:{dark}}}",
        ink = css_color(&c.colors.ink),
        paper = css_color(&c.colors.paper),
        accent = css_color(&c.colors.accent),
        glow = d.accent_glow,
        gold = css_color(&c.colors.gold),
        gold_light = d.gold_light,
        dark = css_color(&c.colors.dark),
    )
}

const BASE_CSS: &str = "*{margin:0;padding:0;box-sizing:border-box}html{scroll-behavior:smooth}body{font-family:'DM Sans',sans-serif;background:var(--dark);color:var(--ink);overflow-x:hidden;-webkit-font-smoothing:antialiased}";

const PRELOADER_CSS: &str = ".preloader{position:fixed;inset:0;background:var(--dark);z-index:10000;display:flex;align-items:center;justify-content:center;transition:opacity .6s,visibility .6s}.preloader.done{opacity:0;visibility:hidden;pointer-events:none}.preloader-text{font-family:'Noto Serif JP',serif;font-weight:200;font-size:clamp(1.5rem,4vw,2.5rem);color:rgba(245,240,232,.9);letter-spacing:.3em;opacity:0;animation:pf 1.8s ease forwards}@keyframes pf{0%{opacity:0;transform:translateY(10px)}30%{opacity:1;transform:translateY(0)}70%{opacity:1}100%{opacity:0}}";

const HERO_CSS: &str = ".hero{min-height:100vh;background:var(--dark);display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;padding:2rem;position:relative;overflow:hidden}";

fn orb_css(d: &Derived) -> String {
    format!(
        ".hero-orb{{position:absolute;border-radius:50%;filter:blur(80px);opacity:.4;animation:of 15s ease-in-out infinite}}.hero-orb-1{{width:500px;height:500px;background:radial-gradient(circle,rgba({a},.3),transparent 70%);top:-10%;right:-10%}}.hero-orb-2{{width:400px;height:400px;background:radial-gradient(circle,rgba({g},.2),transparent 70%);bottom:-5%;left:-5%;animation-delay:-5s}}.hero-orb-3{{width:300px;height:300px;background:radial-gradient(circle,rgba({a},.15),transparent 70%);top:40%;left:30%;animation-delay:-10s}}@keyframes of{{0%,100%{{transform:translate(0,0) scale(1)}}33%{{transform:translate(30px,-20px) scale(1.05)}}66%{{transform:translate(-20px,15px) scale(.95)}}}}",
        a = d.accent_rgb,
        g = d.gold_rgb,
    )
}

fn kanji_css(d: &Derived) -> String {
    format!(
        ".hero-kanji{{position:absolute;writing-mode:vertical-rl;font-family:'Noto Serif JP',serif;font-weight:900;user-select:none;z-index:1}}.hero-kanji-right{{right:6%;top:8%;font-size:clamp(3rem,8vw,8rem);color:rgba({a},.08);letter-spacing:.4em}}.hero-kanji-left{{left:6%;bottom:8%;font-size:clamp(2rem,5vw,5rem);color:rgba({g},.06);letter-spacing:.3em}}",
        a = d.accent_rgb,
        g = d.gold_rgb,
    )
}

fn badge_css(d: &Derived) -> String {
    format!(
        ".club-badge{{display:inline-flex;align-items:center;gap:.6rem;padding:.6rem 1.4rem;border:1px solid rgba(245,240,232,.15);border-radius:100px;font-size:.7rem;font-weight:600;letter-spacing:.18em;text-transform:uppercase;color:rgba(245,240,232,.5);margin-bottom:3rem;backdrop-filter:blur(10px);background:rgba(255,255,255,.03)}}.club-badge::before{{content:'';width:6px;height:6px;background:var(--accent);border-radius:50%;animation:bp 2s ease-in-out infinite}}@keyframes bp{{0%,100%{{opacity:1;box-shadow:0 0 0 0 rgba({a},.4)}}50%{{opacity:.8;box-shadow:0 0 0 6px rgba({a},0)}}}}",
        a = d.accent_rgb,
    )
}

const HERO_TEXT_CSS: &str = concat!(
    ".hero-date{font-family:'Noto Serif JP',serif;font-size:clamp(.85rem,1.8vw,1rem);color:var(--gold-light);letter-spacing:.25em;margin-bottom:1.5rem}\n",
    ".hero-title-en{font-family:'Noto Serif JP',serif;font-weight:900;font-size:clamp(3.5rem,10vw,8rem);line-height:.95;letter-spacing:-.03em;color:var(--paper);margin-bottom:.3rem}\n",
    ".hero-title-jp{font-family:'Noto Serif JP',serif;font-weight:900;font-size:clamp(1.8rem,5vw,4rem);line-height:1;color:var(--accent);margin-bottom:2.5rem}\n",
    ".hero-sub{font-size:clamp(1rem,2.2vw,1.2rem);color:rgba(245,240,232,.55);max-width:480px;line-height:1.7;margin:0 auto 3.5rem}\n",
    ".hero-cta{display:inline-flex;align-items:center;gap:.75rem;padding:1.1rem 2.8rem;background:var(--paper);color:var(--dark);text-decoration:none;font-weight:700;font-size:.95rem;letter-spacing:.05em;border-radius:100px;transition:all .4s cubic-bezier(.16,1,.3,1)}.hero-cta:hover{transform:translateY(-3px) scale(1.02);box-shadow:0 20px 60px rgba(245,240,232,.15)}.hero-cta-arrow{display:inline-block;transition:transform .4s cubic-bezier(.16,1,.3,1)}.hero-cta:hover .hero-cta-arrow{transform:translateX(5px)}\n",
    ".scroll-indicator{position:absolute;bottom:2.5rem;left:50%;transform:translateX(-50%);display:flex;flex-direction:column;align-items:center;gap:.75rem;z-index:2}.scroll-text{font-size:.6rem;letter-spacing:.25em;text-transform:uppercase;color:rgba(245,240,232,.3)}.scroll-bar{width:1px;height:50px;background:rgba(245,240,232,.1);position:relative;overflow:hidden}.scroll-bar::after{content:'';position:absolute;top:-100%;width:100%;height:50%;background:var(--accent);animation:sp 2.5s ease-in-out infinite}@keyframes sp{0%{top:-50%;opacity:0}50%{top:100%;opacity:1}100%{top:100%;opacity:0}}",
);

const TRANSITION_CSS: &str = ".transition-section{height:50vh;background:linear-gradient(to bottom,var(--dark),var(--paper));display:flex;align-items:center;justify-content:center}.transition-text{font-family:'Noto Serif JP',serif;font-weight:200;font-size:clamp(1.2rem,3vw,2rem);color:rgba(245,240,232,.35);letter-spacing:.2em;text-align:center}.transition-sub{font-size:.75rem;color:rgba(138,130,117,.6);letter-spacing:.15em;margin-top:.5rem}";

const DETAILS_CSS: &str = concat!(
    ".details-section{background:var(--paper);padding:8rem 2rem;position:relative}.details-inner{max-width:1000px;margin:0 auto;position:relative;z-index:1}.section-label{font-size:.65rem;font-weight:600;letter-spacing:.25em;text-transform:uppercase;color:var(--accent);margin-bottom:1rem;display:flex;align-items:center;gap:1rem}.section-label::after{content:'';flex:1;height:1px;background:var(--divider)}.section-title{font-family:'Noto Serif JP',serif;font-weight:900;font-size:clamp(2rem,5vw,3.5rem);line-height:1.1;letter-spacing:-.02em;margin-bottom:4rem}\n",
    ".details-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:1.5rem}.detail-card{padding:2.5rem 2rem;background:rgba(255,255,255,.6);border:1px solid var(--divider);border-radius:3px;transition:all .5s cubic-bezier(.16,1,.3,1);backdrop-filter:blur(10px)}.detail-card:hover{transform:translateY(-8px);box-shadow:0 20px 60px rgba(0,0,0,.08);border-color:var(--gold-light)}.detail-icon{font-size:1.8rem;margin-bottom:1.2rem;display:block}.detail-card-label{font-size:.6rem;font-weight:600;letter-spacing:.2em;text-transform:uppercase;color:var(--subtle);margin-bottom:.6rem}.detail-card-value{font-family:'Noto Serif JP',serif;font-size:1.3rem;font-weight:700;line-height:1.3}.detail-card-note{font-size:.82rem;color:var(--subtle);margin-top:.5rem;line-height:1.5}",
);

fn experience_css(d: &Derived) -> String {
    format!(
        ".experience{{background:var(--paper);position:relative}}.experience-sticky{{position:sticky;top:0;min-height:100vh;display:flex;align-items:center;justify-content:center;overflow:hidden}}.experience-bg{{position:absolute;inset:5%;background:var(--dark);border-radius:20px;overflow:hidden}}.experience-bg::before{{content:'';position:absolute;inset:0;background:radial-gradient(ellipse at 20% 50%,rgba({a},.15) 0%,transparent 60%),radial-gradient(ellipse at 80% 50%,rgba({g},.1) 0%,transparent 60%)}}.experience-content{{position:relative;z-index:2;text-align:center;padding:2rem;max-width:700px}}.experience-kanji{{font-family:'Noto Serif JP',serif;font-weight:900;font-size:clamp(5rem,15vw,10rem);line-height:1;color:rgba(245,240,232,.06);margin-bottom:-1rem}}.experience-headline{{font-family:'Noto Serif JP',serif;font-weight:700;font-size:clamp(1.5rem,4vw,2.8rem);color:var(--paper);line-height:1.2;margin-bottom:1.5rem}}.experience-desc{{font-size:clamp(.95rem,2vw,1.1rem);color:rgba(245,240,232,.55);line-height:1.7;max-width:500px;margin:0 auto}}.experience-scroll-space{{height:50vh}}",
        a = d.accent_rgb,
        g = d.gold_rgb,
    )
}

const INCLUSIONS_CSS: &str = ".inclusions-section{background:var(--paper);padding:8rem 2rem}.inclusions-inner{max-width:800px;margin:0 auto}.inclusion-item{padding:2rem 0;border-bottom:1px solid var(--divider);display:grid;grid-template-columns:60px 1fr;gap:1.5rem;align-items:start;transition:all .4s cubic-bezier(.16,1,.3,1)}.inclusion-item:first-child{border-top:1px solid var(--divider)}.inclusion-item:hover{padding-left:1.5rem}.inclusion-item:hover .inclusion-num{color:var(--accent);transform:scale(1.1)}.inclusion-num{font-family:'Noto Serif JP',serif;font-weight:900;font-size:1.8rem;color:var(--divider);transition:all .4s cubic-bezier(.16,1,.3,1);line-height:1;padding-top:.2rem}.inclusion-text{font-size:1.15rem;line-height:1.6}.inclusion-detail{font-size:.85rem;color:var(--subtle);margin-top:.3rem}";

const INTERLUDE_CSS: &str = ".interlude{background:var(--dark);padding:10rem 2rem;text-align:center;position:relative;overflow:hidden}.interlude-kanji{position:absolute;top:50%;left:50%;transform:translate(-50%,-50%);font-family:'Noto Serif JP',serif;font-size:clamp(10rem,30vw,25rem);font-weight:900;color:rgba(255,255,255,.015);pointer-events:none;white-space:nowrap}.interlude-quote{font-family:'Noto Serif JP',serif;font-weight:400;font-size:clamp(1.4rem,3.5vw,2.5rem);color:var(--paper);max-width:650px;margin:0 auto 2rem;line-height:1.5;position:relative;z-index:1}.interlude-attr{font-size:.8rem;color:rgba(245,240,232,.35);letter-spacing:.15em;text-transform:uppercase;position:relative;z-index:1}";

const PRICING_CSS: &str = ".pricing-section{background:var(--paper);padding:10rem 2rem;text-align:center;position:relative}.pricing-section::before{content:'';position:absolute;top:0;left:0;right:0;height:1px;background:linear-gradient(90deg,transparent,var(--divider),transparent)}.pricing-inner{max-width:600px;margin:0 auto;position:relative;z-index:1}.price-eyebrow{font-size:.65rem;font-weight:600;letter-spacing:.25em;text-transform:uppercase;color:var(--accent);margin-bottom:2rem}.price-display{display:flex;align-items:baseline;justify-content:center;gap:.15rem;margin-bottom:.5rem}.price-currency{font-family:'Noto Serif JP',serif;font-size:clamp(1.5rem,3vw,2rem);font-weight:700;color:var(--subtle);align-self:flex-start;margin-top:.8rem}.price-amount{font-family:'Noto Serif JP',serif;font-size:clamp(6rem,15vw,9rem);font-weight:900;line-height:1;letter-spacing:-.03em}.price-breakdown{font-size:.9rem;color:var(--subtle);margin-bottom:1.5rem}.price-includes{display:flex;justify-content:center;gap:.75rem;flex-wrap:wrap;margin-bottom:3.5rem}.price-tag{font-size:.72rem;font-weight:600;letter-spacing:.06em;color:var(--subtle);padding:.4rem .9rem;border:1px solid var(--divider);border-radius:100px;transition:all .3s}.price-tag:hover{border-color:var(--gold-light);color:var(--ink)}";

fn cta_css(d: &Derived) -> String {
    format!(
        ".cta-final{{display:inline-flex;align-items:center;gap:.85rem;padding:1.3rem 3.5rem;background:var(--accent);color:#fff;text-decoration:none;font-weight:700;font-size:1.1rem;letter-spacing:.03em;border-radius:100px;transition:all .4s cubic-bezier(.16,1,.3,1);position:relative;overflow:hidden;box-shadow:0 4px 20px rgba({a},.25)}}.cta-final::before{{content:'';position:absolute;top:0;left:-200%;width:200%;height:100%;background:linear-gradient(90deg,transparent,rgba(255,255,255,.1),transparent);animation:cs 3s ease-in-out infinite}}@keyframes cs{{0%{{left:-200%}}50%{{left:100%}}100%{{left:100%}}}}.cta-final:hover{{transform:translateY(-3px) scale(1.03);box-shadow:0 20px 60px rgba({a},.4);background:var(--accent-glow)}}.cta-arrow{{display:inline-block;transition:transform .4s cubic-bezier(.16,1,.3,1)}}.cta-final:hover .cta-arrow{{transform:translateX(5px)}}",
        a = d.accent_rgb,
    )
}

const CLOSING_CSS: &str = concat!(
    ".urgency-badge{display:inline-block;margin-top:2rem;padding:.5rem 1.2rem;border:1px solid var(--accent);border-radius:100px;font-size:.7rem;font-weight:600;letter-spacing:.12em;text-transform:uppercase;color:var(--accent);animation:up 2.5s ease-in-out infinite}@keyframes up{0%,100%{opacity:1}50%{opacity:.5}}\n",
    ".footer{background:var(--dark);text-align:center;padding:4rem 2rem}.footer-brand{font-family:'Noto Serif JP',serif;font-weight:700;font-size:.95rem;color:rgba(245,240,232,.7);margin-bottom:.5rem}.footer-sub{font-size:.75rem;color:rgba(245,240,232,.25);letter-spacing:.1em}\n",
    ".reveal{opacity:0;transform:translateY(40px);transition:all .9s cubic-bezier(.16,1,.3,1)}.reveal.visible{opacity:1;transform:translateY(0)}.reveal-scale{opacity:0;transform:scale(.92) translateY(20px);transition:all 1s cubic-bezier(.16,1,.3,1)}.reveal-scale.visible{opacity:1;transform:scale(1) translateY(0)}.hero-enter{opacity:0;transform:translateY(30px)}.hero-enter.active{opacity:1;transform:translateY(0);transition:all .8s cubic-bezier(.16,1,.3,1)}\n",
    ".stagger-1{transition-delay:.1s}.stagger-2{transition-delay:.2s}.stagger-3{transition-delay:.3s}.stagger-4{transition-delay:.4s}.stagger-5{transition-delay:.5s}.stagger-6{transition-delay:.6s}.stagger-7{transition-delay:.7s}",
);

fn media_css(c: &EventConfig) -> String {
    let s = &c.sections;
    let mut css = String::from("@media(max-width:768px){");
    if s.kanji {
        css.push_str(".hero-kanji{display:none}");
    }
    css.push_str(".details-grid{grid-template-columns:1fr 1fr;gap:1rem}.detail-card{padding:1.5rem}");
    if s.experience {
        css.push_str(".experience-bg{inset:2%;border-radius:12px}");
    }
    css.push_str("}@media(max-width:500px){.details-grid{grid-template-columns:1fr}");
    if s.inclusions {
        css.push_str(".inclusion-item{grid-template-columns:40px 1fr;gap:1rem}.inclusion-num{font-size:1.4rem}");
    }
    css.push('}');
    css
}

// --- Markup ---

const PRELOADER_MARKUP: &str = r#"<div class="preloader" id="preloader"><span class="preloader-text">ジョンソン日本クラブ</span></div>"#;

const HERO_OPEN: &str = concat!(
    r#"<section class="hero">"#,
    "\n",
    r#"<div class="hero-orb hero-orb-1"></div><div class="hero-orb hero-orb-2"></div><div class="hero-orb hero-orb-3"></div>"#,
);

const KANJI_MARKUP: &str = r#"<div class="hero-kanji hero-kanji-right" data-parallax="0.15">カラオケ</div><div class="hero-kanji hero-kanji-left" data-parallax="0.08">歌声</div>"#;

fn hero_content(c: &EventConfig) -> String {
    format!(
        r##"<div class="hero-content">
<div class="club-badge hero-enter stagger-1">Johnson Japan Club · Cornell</div>
<div class="hero-date hero-enter stagger-2">{date}</div>
<h1 class="hero-title-en hero-enter stagger-3">{title}</h1>
<div class="hero-title-jp hero-enter stagger-4">{name_jp}</div>
<p class="hero-sub hero-enter stagger-5">{tagline}</p>
<a href="#reserve" class="hero-cta hero-enter stagger-6">Reserve Your Spot <span class="hero-cta-arrow">→</span></a>
</div>
<div class="scroll-indicator hero-enter stagger-7"><span class="scroll-text">Scroll</span><div class="scroll-bar"></div></div>
</section>"##,
        date = esc(&c.event_date),
        title = display_title(&c.event_name_en),
        name_jp = esc(&c.event_name_jp),
        tagline = esc(&c.hero_tagline),
    )
}

fn transition_markup(c: &EventConfig) -> String {
    format!(
        r#"<div class="transition-section"><div style="text-align:center"><div class="transition-text reveal">{jp}</div><div class="transition-sub reveal stagger-1">{sub}</div></div></div>"#,
        jp = esc(&c.transition_jp),
        sub = esc(&c.transition_sub),
    )
}

fn details_markup(c: &EventConfig) -> String {
    format!(
        r#"<section class="details-section"><div class="details-inner">
<div class="section-label reveal">The Details</div>
<h2 class="section-title reveal stagger-1">Everything you<br>need to know.</h2>
<div class="details-grid">
<div class="detail-card reveal-scale stagger-1"><span class="detail-icon">📅</span><div class="detail-card-label">When</div><div class="detail-card-value">{date_card}</div><div class="detail-card-note">{time}</div></div>
<div class="detail-card reveal-scale stagger-2"><span class="detail-icon">📍</span><div class="detail-card-label">Where</div><div class="detail-card-value">{venue}</div><div class="detail-card-note">{venue_note}</div></div>
<div class="detail-card reveal-scale stagger-3"><span class="detail-icon">🎫</span><div class="detail-card-label">Price</div><div class="detail-card-value">${price} / person</div><div class="detail-card-note">{price_note}</div></div>
<div class="detail-card reveal-scale stagger-4"><span class="detail-icon">👥</span><div class="detail-card-label">Capacity</div><div class="detail-card-value">{capacity}</div><div class="detail-card-note">First come, first served.</div></div>
</div></div></section>"#,
        date_card = esc(&c.event_date_card),
        time = esc(&c.event_time),
        venue = esc(&c.event_venue),
        venue_note = esc(&c.event_venue_note),
        price = esc(&c.event_price),
        price_note = esc(&c.event_price_note),
        capacity = esc(&c.event_capacity),
    )
}

fn experience_markup(c: &EventConfig) -> String {
    format!(
        r#"<section class="experience"><div class="experience-sticky"><div class="experience-bg reveal-scale"><div class="experience-content"><div class="experience-kanji reveal stagger-1">夜</div><h2 class="experience-headline reveal stagger-2">{headline}</h2><p class="experience-desc reveal stagger-3">{desc}</p></div></div></div><div class="experience-scroll-space"></div></section>"#,
        headline = esc(&c.exp_headline),
        desc = esc(&c.exp_desc),
    )
}

fn inclusions_markup(c: &EventConfig) -> String {
    let mut html = format!(
        "<section class=\"inclusions-section\"><div class=\"inclusions-inner\">\n\
         <div class=\"section-label reveal\">What's Included</div>\n\
         <h2 class=\"section-title reveal stagger-1\">Your ${price} gets you<br>all of this.</h2>\n",
        price = esc(&c.event_price),
    );
    for (i, inc) in c.inclusions.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"inclusion-item reveal stagger-{n}\"><span class=\"inclusion-num\">{n:02}</span><div><div class=\"inclusion-text\">{title}</div><div class=\"inclusion-detail\">{detail}</div></div></div>\n",
            n = i + 1,
            title = esc(&inc.title),
            detail = esc(&inc.detail),
        ));
    }
    html.push_str("</div></section>");
    html
}

fn quote_markup(c: &EventConfig) -> String {
    format!(
        r#"<section class="interlude"><div class="interlude-kanji">日本</div><p class="interlude-quote reveal">{quote}</p><p class="interlude-attr reveal stagger-1">{attr}</p></section>"#,
        quote = esc(&c.quote_text),
        attr = esc(&c.quote_attr),
    )
}

fn pricing_markup(c: &EventConfig) -> String {
    format!(
        r#"<section class="pricing-section" id="reserve"><div class="pricing-inner">
<div class="price-eyebrow reveal">Reserve Your Spot</div>
<div class="price-display reveal stagger-1"><span class="price-currency">$</span><span class="price-amount">{price}</span></div>
<p class="price-breakdown reveal stagger-2">Per person. Covers everything.</p>
<div class="price-includes reveal stagger-3"><span class="price-tag">Karaoke room</span><span class="price-tag">Food &amp; drinks</span><span class="price-tag">3 hours</span><span class="price-tag">Good vibes</span></div>
<a href="{url}" class="cta-final reveal stagger-4" target="_blank" rel="noopener">Get Your Ticket <span class="cta-arrow">→</span></a>
<div class="urgency-badge reveal stagger-5">Limited to {capacity}</div>
</div></section>"#,
        price = esc(&c.event_price),
        url = esc(&c.event_url),
        capacity = esc(&c.event_capacity),
    )
}

const FOOTER_MARKUP: &str = r#"<footer class="footer"><div class="footer-brand">Johnson Japan Club · ジョンソン日本クラブ</div><p class="footer-sub">Cornell SC Johnson College of Business</p></footer>"#;

// --- Script ---

const PRELOADER_SCRIPT: &str = "window.addEventListener('load',()=>{setTimeout(()=>{const p=document.getElementById('preloader');if(p)p.classList.add('done');setTimeout(()=>{document.querySelectorAll('.hero-enter').forEach(e=>e.classList.add('active'))},200)},2000)});";

const HERO_ENTER_SCRIPT: &str = "window.addEventListener('load',()=>{document.querySelectorAll('.hero-enter').forEach(e=>e.classList.add('active'))});";

const REVEAL_SCRIPT: &str = concat!(
    "const o=new IntersectionObserver(e=>{e.forEach(e=>{if(e.isIntersecting){e.target.classList.add('visible');o.unobserve(e.target)}})},{threshold:.1,rootMargin:'0px 0px -50px 0px'});\n",
    "document.querySelectorAll('.reveal,.reveal-scale').forEach(e=>o.observe(e));",
);

const PARALLAX_SCRIPT: &str = "let t=false;window.addEventListener('scroll',()=>{if(!t){requestAnimationFrame(()=>{const y=window.scrollY;document.querySelectorAll('[data-parallax]').forEach(e=>{e.style.transform='translateY('+y*parseFloat(e.dataset.parallax)+'px)'});t=false});t=true}});";
