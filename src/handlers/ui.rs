// src/handlers/ui.rs
use crate::content::{
    self, ContactKind, Experience, Project, ABOUT_PARAGRAPHS, BRAND, CHAT_GREETING, CONTACT_INTRO,
    CONTACT_ITEMS, EXPERIENCES, GITHUB_REPOS_URL, GITHUB_URL, HEADLINE, LINKEDIN_URL, OWNER_NAME,
    PROJECTS, RESUME_ROUTE, SKILL_GROUPS, STATS, TAGLINE,
};
use crate::gemini_client::ERROR_FALLBACK;
use crate::models::insight::ProjectInsight;
use crate::navigation::{NavigationState, SectionId, SCROLLED_THRESHOLD, SCROLL_OFFSET, SECTION_ORDER};
use crate::utils::{current_year, escape_html, external_link_attrs, script_json};
use axum::{response::Html, routing::get, Router};
use serde_json::json;

pub fn ui_routes() -> Router {
    Router::new().route("/", get(portfolio_page))
}

pub async fn portfolio_page() -> Html<String> {
    Html(render_page(&NavigationState::default(), current_year()))
}

/// Full single-page document. `nav` only decides the initial navbar highlight;
/// the page script takes over on the first scroll.
pub fn render_page(nav: &NavigationState, year: i32) -> String {
    let mut html = String::with_capacity(48 * 1024);
    html.push_str(&format!(
        r###"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Portfolio</title>
    <style>{css}</style>
</head>
<body>
"###,
        title = escape_html(OWNER_NAME),
        css = PAGE_CSS,
    ));

    html.push_str(&render_navbar(nav));
    html.push_str("<main>\n");
    html.push_str(&render_hero());
    html.push_str(&render_about());
    html.push_str(&render_experience());
    html.push_str(&render_projects());
    html.push_str(&render_skills());
    html.push_str(&render_contact());
    html.push_str("</main>\n");
    html.push_str(&render_footer(year));
    html.push_str(&render_chat_widget());

    let page_config = json!({
        "scrollOffset": SCROLL_OFFSET,
        "scrolledThreshold": SCROLLED_THRESHOLD,
        "sections": SECTION_ORDER.iter().map(|s| s.anchor()).collect::<Vec<_>>(),
        "chatGreeting": CHAT_GREETING,
        "errorFallback": ERROR_FALLBACK,
        "insightLabel": ProjectInsight::default().button_label(),
    });
    html.push_str(&format!(
        "<script>window.PORTFOLIO = {};</script>\n<script>{}</script>\n</body>\n</html>\n",
        script_json(&page_config),
        PAGE_SCRIPT
    ));
    html
}

fn section_title(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="section-title"><h2>{}</h2><span>{}</span></div>"#,
        escape_html(title),
        escape_html(subtitle)
    )
}

fn render_navbar(nav: &NavigationState) -> String {
    let links: String = SECTION_ORDER
        .iter()
        .map(|section| {
            let active = if *section == nav.active_section { " active" } else { "" };
            format!(
                r##"<a href="#{anchor}" class="nav-link{active}" data-section="{anchor}">{label}</a>"##,
                anchor = section.anchor(),
                active = active,
                label = section.label()
            )
        })
        .collect();

    let scrolled = if nav.scrolled { " scrolled" } else { "" };
    let menu_open = if nav.menu_open { " open" } else { "" };

    format!(
        r##"<nav id="navbar" class="navbar{scrolled}">
    <div class="container nav-inner">
        <a href="#{home}" class="brand" data-section="{home}">⚙ {brand}</a>
        <div class="nav-links">{links}<a href="{resume}" class="resume-link" {ext}>📄 Resume</a></div>
        <button id="menu-toggle" class="menu-toggle" aria-label="Menu">☰</button>
    </div>
    <div id="mobile-menu" class="mobile-menu{menu_open}">{links}<a href="{resume}" class="resume-link" {ext}>📄 Resume</a></div>
</nav>
"##,
        scrolled = scrolled,
        home = SectionId::Home.anchor(),
        brand = escape_html(BRAND),
        links = links,
        resume = RESUME_ROUTE,
        ext = external_link_attrs(),
        menu_open = menu_open,
    )
}

fn render_hero() -> String {
    let (first, last) = OWNER_NAME.rsplit_once(' ').unwrap_or((OWNER_NAME, ""));
    format!(
        r##"<section id="home" class="hero">
    <div class="container hero-inner">
        <div class="badge">👋 Hello, World! I am</div>
        <h1>{first} <span class="accent">{last}</span></h1>
        <h2>{headline}</h2>
        <p>{tagline}</p>
        <div class="hero-actions">
            <a href="#projects" class="btn-primary" data-section="projects">Lihat Portfolio &lt;/&gt;</a>
            <a href="{github}" class="social" {ext}>GitHub</a>
            <a href="{linkedin}" class="social" {ext}>LinkedIn</a>
            <a href="mailto:{email}" class="social" {ext}>Email</a>
        </div>
        <a href="#about" class="scroll-hint" data-section="about">⌄</a>
    </div>
</section>
"##,
        first = escape_html(first),
        last = escape_html(last),
        headline = escape_html(HEADLINE),
        tagline = escape_html(TAGLINE),
        github = GITHUB_URL,
        linkedin = LINKEDIN_URL,
        email = content::EMAIL,
        ext = external_link_attrs(),
    )
}

fn render_about() -> String {
    // Paragraphs carry intentional inline markup.
    let paragraphs: String = ABOUT_PARAGRAPHS
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();
    let stats: String = STATS
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                escape_html(s.value),
                escape_html(s.label)
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="section alt">
    <div class="container">
        {title}
        <div class="grid-2">
            <div class="card"><h3>👤 Profile Singkat</h3>{paragraphs}</div>
            <div class="stats">{stats}</div>
        </div>
    </div>
</section>
"#,
        title = section_title("About Me", "Who I Am"),
        paragraphs = paragraphs,
        stats = stats,
    )
}

fn render_experience_card(exp: &Experience) -> String {
    let items: String = exp
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();
    format!(
        r#"<div class="timeline-item{active}">
    <div class="card">
        <div class="timeline-head">
            <div><h3>{role}</h3><p class="accent">{company}</p></div>
            <span class="period">{period}</span>
        </div>
        <ul>{items}</ul>
    </div>
</div>
"#,
        active = if exp.active { " active" } else { "" },
        role = escape_html(exp.role),
        company = escape_html(exp.company),
        period = escape_html(exp.period),
        items = items,
    )
}

fn render_experience() -> String {
    let cards: String = EXPERIENCES.iter().map(render_experience_card).collect();
    format!(
        r#"<section id="experience" class="section">
    <div class="container narrow">
        {title}
        <div class="timeline">{cards}</div>
    </div>
</section>
"#,
        title = section_title("Experience", "My Career Journey"),
        cards = cards,
    )
}

pub fn render_project_card(project: &Project, insight: &ProjectInsight) -> String {
    let tags: String = project
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();

    let insight_panel = match insight.text.as_deref() {
        Some(text) => format!(
            r#"<div class="insight" data-insight-panel="{slug}"><div class="insight-head">✨ AI Analysis</div><div class="insight-body">{text}</div></div>"#,
            slug = project.slug,
            text = escape_html(text),
        ),
        None => format!(
            r#"<div class="insight hidden" data-insight-panel="{slug}"><div class="insight-head">✨ AI Analysis</div><div class="insight-body"></div></div>"#,
            slug = project.slug,
        ),
    };

    format!(
        r#"<div class="card project" data-project="{slug}">
    <div class="project-head">
        <span class="kind">{kind}</span>
        <a href="{link}" {ext}>↗</a>
    </div>
    <h3>{title}</h3>
    <p class="muted">{description}</p>
    {insight_panel}
    <div class="tags">{tags}</div>
    <button class="insight-btn" data-insight="{slug}"{disabled}>{label}</button>
</div>
"#,
        slug = project.slug,
        kind = escape_html(project.kind),
        link = escape_html(project.link),
        ext = external_link_attrs(),
        title = escape_html(project.title),
        description = escape_html(project.description),
        insight_panel = insight_panel,
        tags = tags,
        disabled = if insight.is_disabled() { " disabled" } else { "" },
        label = insight.button_label(),
    )
}

fn render_projects() -> String {
    let fresh = ProjectInsight::default();
    let cards: String = PROJECTS
        .iter()
        .map(|p| render_project_card(p, &fresh))
        .collect();

    format!(
        r#"<section id="projects" class="section alt">
    <div class="container">
        {title}
        <div class="grid-3">
            {cards}
            <a class="card more-projects" href="{repos}" {ext}>
                <h3>Lihat Project Lainnya</h3>
                <p class="muted">Kunjungi GitHub saya untuk melihat source code lengkap dan repositori lainnya.</p>
                <span class="accent">github.com/elite789 ↗</span>
            </a>
        </div>
    </div>
</section>
"#,
        title = section_title("Projects", "Featured Work & Code"),
        cards = cards,
        repos = GITHUB_REPOS_URL,
        ext = external_link_attrs(),
    )
}

fn render_skills() -> String {
    let groups: String = SKILL_GROUPS
        .iter()
        .map(|g| {
            let skills: String = g
                .skills
                .iter()
                .map(|s| format!(r#"<span class="skill">{}</span>"#, escape_html(s)))
                .collect();
            format!(
                r#"<div class="card"><h3>{}</h3><div class="tags">{}</div></div>"#,
                escape_html(g.category),
                skills
            )
        })
        .collect();

    format!(
        r#"<section id="skills" class="section">
    <div class="container">
        {title}
        <div class="grid-4">{groups}</div>
    </div>
</section>
"#,
        title = section_title("Skills", "Technical Arsenal"),
        groups = groups,
    )
}

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "✉",
        ContactKind::LinkedIn => "in",
        ContactKind::GitHub => "⌥",
        ContactKind::Location => "📍",
    }
}

fn render_contact() -> String {
    let items: String = CONTACT_ITEMS
        .iter()
        .map(|item| {
            let body = match item.href {
                Some(href) => format!(
                    r#"<a href="{}" {}>{}</a>"#,
                    escape_html(href),
                    external_link_attrs(),
                    escape_html(item.text)
                ),
                None => format!("<span>{}</span>", escape_html(item.text)),
            };
            format!(
                r#"<div class="contact-item"><span class="icon">{}</span>{}</div>"#,
                contact_icon(item.kind),
                body
            )
        })
        .collect();

    // The form is presentational; submitting it does nothing.
    format!(
        r#"<section id="contact" class="section alt">
    <div class="container narrow">
        {title}
        <div class="grid-2">
            <div>
                <h3>Mari Berkolaborasi!</h3>
                <p class="muted">{intro}</p>
                <div class="contact-list">{items}</div>
            </div>
            <form class="card contact-form" onsubmit="event.preventDefault();">
                <label>Nama<input type="text" placeholder="Nama Anda"></label>
                <label>Email<input type="email" placeholder="email@contoh.com"></label>
                <label>Pesan<textarea rows="4" placeholder="Halo Azhar, saya ingin mendiskusikan..."></textarea></label>
                <button type="submit" class="btn-primary">Kirim Pesan ➤</button>
            </form>
        </div>
    </div>
</section>
"#,
        title = section_title("Contact", "Get In Touch"),
        intro = escape_html(CONTACT_INTRO),
        items = items,
    )
}

fn render_footer(year: i32) -> String {
    format!(
        "<footer class=\"footer\"><p>&copy; {} {}. Built with Rust &amp; Axum.</p></footer>\n",
        year,
        escape_html(OWNER_NAME)
    )
}

fn render_chat_widget() -> String {
    format!(
        r#"<div id="chat-widget" class="chat-widget">
    <div id="chat-window" class="chat-window hidden">
        <div class="chat-header">
            <div><strong>Azhar AI Assistant</strong><div class="online">● Online</div></div>
            <button id="chat-close" aria-label="Close">✕</button>
        </div>
        <div id="chat-messages" class="chat-messages">
            <div class="msg assistant">{greeting}</div>
        </div>
        <div id="chat-typing" class="msg assistant typing hidden">• • •</div>
        <form id="chat-form" class="chat-form">
            <input id="chat-input" type="text" placeholder="Tanya tentang Azhar..." autocomplete="off">
            <button id="chat-send" type="submit" disabled>➤</button>
        </form>
    </div>
    <button id="chat-toggle" class="chat-toggle" aria-label="Chat">💬</button>
</div>
"#,
        greeting = escape_html(CHAT_GREETING),
    )
}

const PAGE_CSS: &str = r###"
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #020617; color: #e2e8f0; line-height: 1.6; }
a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.container.narrow { max-width: 900px; }
.hidden { display: none !important; }
.accent { color: #22d3ee; }
.muted { color: #94a3b8; }
.navbar { position: fixed; top: 0; width: 100%; z-index: 50; padding: 24px 0; transition: all 0.3s; }
.navbar.scrolled { background: rgba(15, 23, 42, 0.95); backdrop-filter: blur(8px); padding: 16px 0; box-shadow: 0 4px 20px rgba(0,0,0,0.4); }
.nav-inner { display: flex; justify-content: space-between; align-items: center; }
.brand { font-weight: bold; font-size: 1.5rem; color: #22d3ee; }
.nav-links { display: flex; gap: 28px; align-items: center; }
.nav-link { color: #cbd5e1; border-bottom: 2px solid transparent; padding-bottom: 4px; }
.nav-link.active, .nav-link:hover { color: #22d3ee; border-color: #22d3ee; }
.resume-link { border: 1px solid #22d3ee; color: #22d3ee; padding: 8px 18px; border-radius: 999px; }
.menu-toggle { display: none; background: none; border: none; color: #cbd5e1; font-size: 1.6rem; cursor: pointer; }
.mobile-menu { display: none; flex-direction: column; gap: 16px; padding: 24px; text-align: center; background: #0f172a; }
.hero { min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; padding-top: 80px; }
.hero-inner { display: flex; flex-direction: column; align-items: center; gap: 20px; }
.hero h1 { font-size: 3.5rem; color: white; }
.hero h2 { font-size: 1.6rem; color: #94a3b8; }
.hero p { max-width: 640px; color: #94a3b8; }
.badge { padding: 8px 16px; border: 1px solid #334155; border-radius: 999px; color: #22d3ee; background: rgba(30,41,59,0.5); }
.hero-actions { display: flex; gap: 16px; flex-wrap: wrap; justify-content: center; }
.btn-primary { background: linear-gradient(90deg, #06b6d4, #2563eb); color: white; border: none; padding: 14px 28px; border-radius: 999px; font-weight: bold; cursor: pointer; }
.social { padding: 12px 18px; border: 1px solid #334155; border-radius: 999px; background: #1e293b; }
.scroll-hint { font-size: 2rem; color: #64748b; }
.section { padding: 96px 0; }
.section.alt { background: #0f172a; }
.section-title { text-align: center; margin-bottom: 64px; }
.section-title h2 { font-size: 2.2rem; color: white; }
.section-title span { display: block; margin-top: 12px; color: #22d3ee; text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.85rem; }
.card { background: #1e293b; border: 1px solid #334155; border-radius: 16px; padding: 24px; }
.card h3 { color: white; margin-bottom: 12px; }
.card p { margin-bottom: 12px; }
.grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 48px; align-items: start; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
.grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; }
.stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }
.stat { text-align: center; background: rgba(30,41,59,0.5); border: 1px solid #334155; border-radius: 12px; padding: 24px; }
.stat-value { font-size: 2rem; font-weight: bold; color: white; }
.stat-label { color: #94a3b8; font-size: 0.9rem; }
.timeline { display: flex; flex-direction: column; gap: 32px; }
.timeline-item { border-left: 2px solid #334155; padding-left: 32px; }
.timeline-item.active { border-color: #22d3ee; }
.timeline-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.period { font-family: monospace; font-size: 0.85rem; color: #64748b; background: #0f172a; padding: 4px 12px; border-radius: 999px; }
.timeline-item ul { list-style: none; display: flex; flex-direction: column; gap: 8px; font-size: 0.9rem; }
.timeline-item li::before { content: "• "; color: #06b6d4; }
.project { display: flex; flex-direction: column; }
.project-head { display: flex; justify-content: space-between; margin-bottom: 16px; }
.kind { font-size: 0.75rem; text-transform: uppercase; color: #67e8f9; background: rgba(51,65,85,0.5); padding: 4px 8px; border-radius: 4px; }
.tags { display: flex; flex-wrap: wrap; gap: 8px; margin-top: auto; }
.tag, .skill { font-family: monospace; font-size: 0.75rem; background: #0f172a; border: 1px solid #334155; padding: 4px 8px; border-radius: 6px; color: #67e8f9; }
.insight { margin-bottom: 16px; padding: 12px; background: rgba(22,78,99,0.2); border: 1px solid rgba(6,182,212,0.3); border-radius: 8px; font-size: 0.8rem; }
.insight-head { color: #22d3ee; font-weight: bold; text-transform: uppercase; margin-bottom: 8px; }
.insight-body { white-space: pre-line; }
.insight-btn { margin-top: 16px; width: 100%; padding: 8px; border-radius: 8px; border: 1px solid rgba(6,182,212,0.3); background: rgba(22,78,99,0.5); color: #22d3ee; font-weight: bold; cursor: pointer; }
.insight-btn:disabled { background: #0f172a; color: #64748b; border-color: #1e293b; cursor: default; }
.more-projects { border-style: dashed; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; }
.contact-list { display: flex; flex-direction: column; gap: 16px; margin-top: 24px; }
.contact-item { display: flex; align-items: center; gap: 16px; }
.contact-item .icon { width: 40px; height: 40px; border-radius: 50%; background: #1e293b; display: flex; align-items: center; justify-content: center; color: #22d3ee; }
.contact-form { display: flex; flex-direction: column; gap: 16px; }
.contact-form label { display: flex; flex-direction: column; gap: 4px; color: #94a3b8; font-size: 0.9rem; }
.contact-form input, .contact-form textarea { background: #0f172a; border: 1px solid #334155; border-radius: 8px; padding: 12px; color: white; }
.footer { text-align: center; padding: 32px; color: #64748b; font-size: 0.9rem; border-top: 1px solid #0f172a; }
.chat-widget { position: fixed; bottom: 24px; right: 24px; z-index: 50; }
.chat-toggle { width: 56px; height: 56px; border-radius: 50%; border: none; font-size: 1.4rem; cursor: pointer; background: linear-gradient(90deg, #06b6d4, #2563eb); }
.chat-window { position: absolute; bottom: 68px; right: 0; width: 380px; height: 500px; background: #0f172a; border: 1px solid #334155; border-radius: 16px; display: flex; flex-direction: column; overflow: hidden; }
.chat-header { display: flex; justify-content: space-between; align-items: center; padding: 16px; background: #1e293b; }
.chat-header button { background: none; border: none; color: #94a3b8; cursor: pointer; }
.online { font-size: 0.75rem; color: #22c55e; }
.chat-messages { flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 16px; }
.msg { max-width: 85%; padding: 12px; border-radius: 16px; font-size: 0.9rem; white-space: pre-line; }
.msg.user { align-self: flex-end; background: #0891b2; color: white; }
.msg.assistant { align-self: flex-start; background: #1e293b; border: 1px solid #334155; }
.typing { margin: 0 16px 8px; }
.chat-form { display: flex; gap: 8px; padding: 12px; background: #1e293b; }
.chat-form input { flex: 1; background: #0f172a; border: 1px solid #334155; border-radius: 12px; padding: 8px 16px; color: white; }
.chat-form button { background: #06b6d4; border: none; border-radius: 12px; padding: 8px 12px; color: white; cursor: pointer; }
.chat-form button:disabled { opacity: 0.5; cursor: not-allowed; }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-toggle { display: block; }
    .mobile-menu.open { display: flex; }
    .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.4rem; }
    .chat-window { width: 320px; }
}
"###;

const PAGE_SCRIPT: &str = r###"
(function () {
    const cfg = window.PORTFOLIO;
    let sessionId = null;
    let sessionPromise = null;
    let awaiting = false;
    let chatOpen = false;

    async function api(method, path, body) {
        const res = await fetch(path, {
            method,
            headers: { 'Content-Type': 'application/json' },
            body: body === undefined ? undefined : JSON.stringify(body),
        });
        if (!res.ok) {
            const err = new Error('HTTP ' + res.status);
            err.status = res.status;
            throw err;
        }
        return res.json();
    }

    // One session per visit: concurrent callers share the in-flight creation.
    function ensureSession() {
        if (!sessionPromise) {
            sessionPromise = api('POST', '/api/session').then(function (data) {
                sessionId = data.session_id;
                return sessionId;
            }, function (err) {
                sessionPromise = null;
                throw err;
            });
        }
        return sessionPromise;
    }
    function forgetSession() {
        sessionId = null;
        sessionPromise = null;
    }
    function onRequestError(label, err) {
        console.error(label, err);
        // Expired or ended on the server; the next action starts a fresh one.
        if (err.status === 404) forgetSession();
    }

    // Navigation: scrolled style + scroll-spy.
    const navbar = document.getElementById('navbar');
    const mobileMenu = document.getElementById('mobile-menu');
    function setActive(id) {
        document.querySelectorAll('.nav-link').forEach(function (a) {
            a.classList.toggle('active', a.dataset.section === id);
        });
    }
    function onScroll() {
        navbar.classList.toggle('scrolled', window.scrollY > cfg.scrolledThreshold);
        let active = null;
        cfg.sections.forEach(function (id) {
            const el = document.getElementById(id);
            if (!el) return;
            const rect = el.getBoundingClientRect();
            if (rect.top <= cfg.scrollOffset && rect.bottom >= cfg.scrollOffset) active = id;
        });
        if (active) setActive(active);
    }
    window.addEventListener('scroll', onScroll);
    document.getElementById('menu-toggle').addEventListener('click', function () {
        mobileMenu.classList.toggle('open');
    });
    document.querySelectorAll('[data-section]').forEach(function (a) {
        a.addEventListener('click', function (e) {
            const el = document.getElementById(a.dataset.section);
            if (!el) return;
            e.preventDefault();
            mobileMenu.classList.remove('open');
            window.scrollTo({ top: el.offsetTop, behavior: 'smooth' });
        });
    });

    // Chat widget.
    const chatWindow = document.getElementById('chat-window');
    const messages = document.getElementById('chat-messages');
    const typing = document.getElementById('chat-typing');
    const input = document.getElementById('chat-input');
    const send = document.getElementById('chat-send');

    function appendMessage(role, text) {
        const div = document.createElement('div');
        div.className = 'msg ' + role;
        div.textContent = text;
        messages.appendChild(div);
        messages.scrollTop = messages.scrollHeight;
    }
    function renderMessages(list) {
        messages.innerHTML = '';
        list.forEach(function (m) { appendMessage(m.role, m.text); });
    }
    function refreshSend() {
        send.disabled = awaiting || input.value.trim() === '';
    }
    function applyChat(chat) {
        chatOpen = chat.state !== 'closed';
        chatWindow.classList.toggle('hidden', !chatOpen);
        renderMessages(chat.messages);
    }

    async function chatAction(action) {
        try {
            const id = await ensureSession();
            const data = await api('POST', '/api/chat/' + id + '/' + action);
            applyChat(data.chat);
        } catch (err) {
            onRequestError('Chat ' + action + ' failed:', err);
        }
    }
    document.getElementById('chat-toggle').addEventListener('click', function () { chatAction('toggle'); });
    document.getElementById('chat-close').addEventListener('click', function () { chatAction('close'); });
    input.addEventListener('input', refreshSend);
    document.getElementById('chat-form').addEventListener('submit', async function (e) {
        e.preventDefault();
        const text = input.value;
        if (!text.trim() || awaiting) return;
        input.value = '';
        awaiting = true;
        refreshSend();
        appendMessage('user', text);
        typing.classList.remove('hidden');
        try {
            const id = await ensureSession();
            const data = await api('POST', '/api/chat/' + id + '/messages', { message: text });
            applyChat(data.chat);
        } catch (err) {
            onRequestError('Chat request failed:', err);
            appendMessage('assistant', cfg.errorFallback);
        } finally {
            awaiting = false;
            typing.classList.add('hidden');
            refreshSend();
        }
    });

    // Project insights.
    function applyInsight(view) {
        const btn = document.querySelector('[data-insight="' + view.slug + '"]');
        const panel = document.querySelector('[data-insight-panel="' + view.slug + '"]');
        if (btn) {
            btn.textContent = view.button_label;
            btn.disabled = view.disabled;
        }
        if (panel && view.text) {
            panel.querySelector('.insight-body').textContent = view.text;
            panel.classList.remove('hidden');
        }
    }
    function resetInsight(btn) {
        btn.disabled = false;
        btn.textContent = cfg.insightLabel;
    }
    document.querySelectorAll('[data-insight]').forEach(function (btn) {
        btn.addEventListener('click', async function () {
            if (btn.disabled) return;
            btn.disabled = true;
            btn.textContent = 'Analyzing...';
            try {
                const id = await ensureSession();
                const data = await api('POST', '/api/session/' + id + '/insights/' + btn.dataset.insight);
                applyInsight(data.insight);
            } catch (err) {
                onRequestError('Insight request failed:', err);
                resetInsight(btn);
            }
        });
    });

    window.addEventListener('pagehide', function () {
        if (sessionId) {
            fetch('/api/session/' + sessionId, { method: 'DELETE', keepalive: true });
        }
        forgetSession();
    });
    // Restored from the back/forward cache: the old session is gone, start clean.
    window.addEventListener('pageshow', function (e) {
        if (!e.persisted) return;
        awaiting = false;
        typing.classList.add('hidden');
        applyChat({ state: 'closed', messages: [{ role: 'assistant', text: cfg.chatGreeting }] });
        refreshSend();
        document.querySelectorAll('[data-insight]').forEach(resetInsight);
        document.querySelectorAll('[data-insight-panel]').forEach(function (panel) {
            panel.classList.add('hidden');
            panel.querySelector('.insight-body').textContent = '';
        });
    });
})();
"###;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insight::InsightStatus;

    #[test]
    fn test_page_contains_every_section_anchor() {
        let html = render_page(&NavigationState::default(), 2025);
        for section in SECTION_ORDER {
            assert!(
                html.contains(&format!(r#"<section id="{}""#, section.anchor())),
                "missing section {}",
                section.anchor()
            );
        }
        assert!(html.contains("&copy; 2025 Azhar Dzakwan Azizi"));
    }

    #[test]
    fn test_initial_nav_highlight_follows_state() {
        let html = render_page(&NavigationState::default(), 2025);
        assert!(html.contains(r##"<a href="#home" class="nav-link active" data-section="home">Home</a>"##));
        assert!(html.contains(r##"<a href="#about" class="nav-link" data-section="about">About</a>"##));
    }

    #[test]
    fn test_resume_and_external_links_open_new_context() {
        let html = render_page(&NavigationState::default(), 2025);
        assert!(html.contains(r#"<a href="/resume" class="resume-link" target="_blank" rel="noopener noreferrer">"#));
        assert!(html.contains(r#"href="mailto:azhardzakwanazizi@gmail.com""#));
        assert!(html.contains(GITHUB_REPOS_URL));
    }

    #[test]
    fn test_project_cards_render_with_fresh_buttons() {
        let html = render_page(&NavigationState::default(), 2025);
        for project in PROJECTS.iter() {
            assert!(html.contains(&format!(r#"data-insight="{}">✨ Generate AI Insight</button>"#, project.slug)));
        }
        assert!(html.contains("Sales &amp; Inventory Dashboard"));
        assert!(!html.contains("Proyek Business Intelligence"));
    }

    #[test]
    fn test_project_card_with_generated_insight() {
        let insight = ProjectInsight {
            status: InsightStatus::Done,
            text: Some("Impact: <fast>".to_string()),
        };
        let card = render_project_card(&PROJECTS[0], &insight);
        assert!(card.contains("Impact: &lt;fast&gt;"));
        assert!(card.contains(" disabled>Insight Generated</button>"));
        assert!(!card.contains("insight hidden"));
    }

    fn page_config(html: &str) -> serde_json::Value {
        let start = html.find("window.PORTFOLIO = ").unwrap() + "window.PORTFOLIO = ".len();
        let end = start + html[start..].find(";</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_page_config_carries_reset_texts() {
        let html = render_page(&NavigationState::default(), 2025);
        let config = page_config(&html);
        assert_eq!(config["scrollOffset"], 100.0);
        assert_eq!(config["chatGreeting"], CHAT_GREETING);
        assert_eq!(config["errorFallback"], ERROR_FALLBACK);
        assert_eq!(config["insightLabel"], "✨ Generate AI Insight");
    }

    #[test]
    fn test_script_creates_one_session_per_visit() {
        // Concurrent first clicks must await the same creation request.
        assert_eq!(PAGE_SCRIPT.matches("api('POST', '/api/session')").count(), 1);
        assert!(PAGE_SCRIPT.contains("if (!sessionPromise) {"));
        assert!(PAGE_SCRIPT.contains("return sessionPromise;"));
        assert!(!PAGE_SCRIPT.contains("if (sessionId) return sessionId;"));
    }

    #[test]
    fn test_script_drops_ended_session_and_recovers_controls() {
        let pagehide = &PAGE_SCRIPT[PAGE_SCRIPT.find("'pagehide'").unwrap()..];
        let pagehide = &pagehide[..pagehide.find("'pageshow'").unwrap()];
        assert!(pagehide.contains("method: 'DELETE', keepalive: true"));
        assert!(pagehide.contains("forgetSession();"));

        assert!(PAGE_SCRIPT.contains("if (err.status === 404) forgetSession();"));
        assert!(PAGE_SCRIPT.contains("appendMessage('assistant', cfg.errorFallback);"));
        assert!(PAGE_SCRIPT.contains("resetInsight(btn);"));
        assert!(PAGE_SCRIPT.contains("if (!e.persisted) return;"));
    }

    #[test]
    fn test_chat_widget_starts_closed_with_greeting() {
        let html = render_page(&NavigationState::default(), 2025);
        assert!(html.contains(r#"<div id="chat-window" class="chat-window hidden">"#));
        assert!(html.contains(&escape_html(CHAT_GREETING)));
    }
}
