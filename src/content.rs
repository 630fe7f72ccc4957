// src/content.rs
//! Hardcoded portfolio content: everything the page renders and the prompts sent upstream.

/// Default system instruction for the chat assistant.
pub const RESUME_CONTEXT: &str = r#"
Anda adalah AI Assistant untuk portofolio Azhar Dzakwan Azizi. Jawab pertanyaan pengunjung seolah-olah Anda adalah representasi digital profesional dari Azhar. Gunakan nada yang ramah, profesional, dan antusias.

Data Diri:
- Nama: Azhar Dzakwan Azizi
- Lokasi: Depok, Indonesia
- Pendidikan: S1 Teknik Robotika dan Kecerdasan Buatan, Universitas Airlangga (IPK 3.66/4.00, Cum Laude). Lulus Des 2024.
- Bahasa: Indonesia (Native), Inggris (Professional).

Pengalaman Kerja:
1. Intern AI Analyst di AMANA Solutions (Nov 2025 - Sekarang): Fokus pada analisis data, pengembangan solusi AI, dan machine learning untuk bisnis.
2. IT Support di PT Delta Mate Indonesia (Jul 2025 - Oct 2025): Manage aset IT (Snipe-IT, Docker), maintenance software, otomasi payroll dengan Python Pandas.
3. Sales Admin di PT Chelatama Perkasa (Des 2024 - Apr 2025): Kelola data proyek, laporan penjualan, kurangi error pricing 15%.
4. IoT R&D Engineer Intern di PT ARIA AGRI Indonesia (Agus 2022 - Des 2022): Buat sistem penyiraman otomatis IoT, analisis data sensor, dashboard Blynk.

Proyek Unggulan:
1. Skripsi (Thesis): Autonomous Mobile Robot dengan A-Star Path Planning. Self-driving robot dengan navigasi rute terdekat, rotary encoder, sensor ultrasonik, Python.
2. Podcast Summarization AI: Pipeline NLP. Audio -> 30s segments -> Whisper ASR (Speech-to-Text) -> BART Transformer (Summarization). Akurasi transkripsi 92%.
3. Sales Dashboard: Analisis data penjualan & inventoris. Python (Pandas) untuk cleaning, Tableau untuk visualisasi. Mengurangi waktu reporting dari 2 jam ke 15 menit.

Skill Teknis:
- Programming: Python, SQL, JavaScript, C++.
- Data/AI: Pandas, NumPy, Scikit-learn, Hugging Face, OpenCV, TensorFlow, Tableau.
- Tools: Docker, Git, Jupyter.

Instruksi Khusus:
- Jika ditanya kontak, arahkan ke email: azhardzakwanazizi@gmail.com atau LinkedIn.
- Jawaban harus ringkas tapi informatif.
- Jika ditanya hal di luar konteks ini, jawab sopan bahwa Anda hanya tahu tentang profesionalitas Azhar.
"#;

/// System instruction for per-project insight generation.
pub const RECRUITER_INSTRUCTION: &str =
    "You are a senior tech recruiter analyst. Summarize technical projects impressively.";

pub const CHAT_GREETING: &str =
    "Halo! Saya adalah AI Assistant Azhar. Ada yang bisa saya bantu tentang portofolio atau pengalaman Azhar?";

pub const OWNER_NAME: &str = "Azhar Dzakwan Azizi";
pub const BRAND: &str = "AZHAR.DEV";
pub const HEADLINE: &str = "Robotics & AI Engineer | Data Analyst";
pub const TAGLINE: &str = "Menggabungkan keahlian Robotika, Artificial Intelligence, dan Data Analytics untuk menciptakan solusi otomatisasi cerdas dan wawasan bisnis yang berdampak.";

pub const GITHUB_URL: &str = "https://github.com/elite789";
pub const GITHUB_REPOS_URL: &str = "https://github.com/elite789?tab=repositories";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/azhardzakwan";
pub const EMAIL: &str = "azhardzakwanazizi@gmail.com";
pub const LOCATION: &str = "Depok, Indonesia";

/// Public path the resume download is served from.
pub const RESUME_ROUTE: &str = "/resume";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Lulusan <strong>Teknik Robotika dan Kecerdasan Buatan</strong> dari Universitas Airlangga (IPK 3.66/4.00) dengan pengalaman praktis dalam analisis data, machine learning, dan implementasi sistem otomasi.",
    "Saya memiliki passion dalam pemecahan masalah di lingkungan yang dinamis, mulai dari merancang algoritma navigasi robot otonom hingga membangun dashboard analitik bisnis yang meningkatkan efisiensi operasional.",
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "3.66", label: "GPA (Cum Laude)" },
    Stat { value: "3+", label: "Posisi Profesional" },
    Stat { value: "10+", label: "Tech Projects" },
    Stat { value: "4+", label: "Years Coding" },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub active: bool,
}

pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        role: "Intern AI Analyst",
        company: "AMANA Solutions",
        period: "Nov 2025 - Present",
        highlights: &[
            "Memulai peran baru sebagai AI Analyst, berfokus pada analisis data dan pengembangan solusi AI.",
            "Berkolaborasi dalam tim untuk proyek-proyek inovatif berbasis kecerdasan buatan.",
            "Mengimplementasikan integrasi AI dalam berbagai solusi bisnis untuk meningkatkan efisiensi dan produktivitas.",
        ],
        active: true,
    },
    Experience {
        role: "IT Support",
        company: "PT Delta Mate Indonesia",
        period: "Jul 2025 - Oct 2025",
        highlights: &[
            "Mengelola aset IT menggunakan Snipe-IT Software dan deployment via Docker.",
            "Bertanggung jawab atas maintenance aset IT dan instalasi software.",
            "Menggunakan Python (Pandas) untuk otomatisasi pengolahan data payroll bulanan.",
        ],
        active: false,
    },
    Experience {
        role: "Sales Admin",
        company: "PT Chelatama Perkasa",
        period: "Dec 2024 - Apr 2025",
        highlights: &[
            "Mengelola data pelanggan dan proyek konstruksi untuk akurasi harga dan timeline.",
            "Membuat laporan penjualan dan kuotasi, meningkatkan akurasi harga dan mengurangi error 15%.",
            "Membangun tracking sheet berbasis Excel untuk visibilitas progress proyek.",
        ],
        active: false,
    },
    Experience {
        role: "IoT R&D Engineer Intern",
        company: "PT ARIA AGRI Indonesia",
        period: "Aug 2022 - Dec 2022",
        highlights: &[
            "Membangun sistem penyiraman otomatis berbasis IoT untuk efisiensi irigasi.",
            "Menganalisis data sensor untuk optimasi penggunaan air.",
            "Konfigurasi dashboard Blynk IoT untuk visualisasi data jarak jauh.",
        ],
        active: false,
    },
];

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
    /// Longer write-up that only feeds the insight prompt.
    #[serde(skip)]
    pub full_context: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        slug: "autonomous-mobile-robot",
        title: "Autonomous Mobile Robot A*",
        kind: "Thesis",
        tags: &["Python", "Robotics", "Path Planning", "Sensors"],
        description: "Mengembangkan robot mobile otonom dengan algoritma A-Star untuk navigasi rute terdekat. Integrasi rotary encoder dan sensor ultrasonik untuk obstacle avoidance.",
        link: GITHUB_URL,
        full_context: "Proyek skripsi ini berfokus pada navigasi robot mobile otonom. Tantangan utamanya adalah mengimplementasikan algoritma A* (A-Star) secara efisien pada hardware terbatas agar robot dapat mencari rute terpendek secara real-time. Saya menggunakan Python untuk logika navigasi dan mengintegrasikan data dari rotary encoder (odometry) serta sensor ultrasonik untuk deteksi halangan dinamis.",
    },
    Project {
        slug: "podcast-summarization-ai",
        title: "Podcast Summarization AI",
        kind: "Data Science",
        tags: &["Python", "NLP", "HuggingFace", "Wav2Vec", "BART"],
        description: "Pipeline otomatis untuk memproses audio podcast, transkripsi speech-to-text (Whisper), dan peringkasan teks menggunakan model transformer BART.",
        link: GITHUB_URL,
        full_context: "Proyek NLP end-to-end untuk meringkas konten audio panjang. Pipeline dimulai dengan pemrosesan audio menggunakan Librosa (segmentasi 30 detik), lalu speech-to-text menggunakan model Whisper (akurasi 92%), dan akhirnya text summarization menggunakan model BART dari Hugging Face. Ini memecahkan masalah konsumsi konten audio yang memakan waktu.",
    },
    Project {
        slug: "sales-inventory-dashboard",
        title: "Sales & Inventory Dashboard",
        kind: "Analytics",
        tags: &["Tableau", "Pandas", "Excel", "Data Viz"],
        description: "Dashboard interaktif untuk visualisasi tren penjualan dan stok. Mengotomatisasi laporan penjualan dari 2 jam menjadi 15 menit menggunakan Python.",
        link: GITHUB_URL,
        full_context: "Proyek Business Intelligence untuk optimasi ritel. Saya menggunakan Python Pandas untuk membersihkan dataset kotor berisi 1000+ record penjualan. Hasilnya divisualisasikan di Tableau untuk melacak KPI kritis. Dampak bisnisnya nyata: strategi pembelian berbasis data meningkatkan ketersediaan stok barang terlaris sebesar 15% dan menghemat waktu admin hingga 87%.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Programming",
        skills: &["Python", "SQL", "JavaScript", "C++ (Arduino)"],
    },
    SkillGroup {
        category: "Data & Tools",
        skills: &["Pandas", "NumPy", "Tableau", "Excel", "Docker", "Git"],
    },
    SkillGroup {
        category: "AI & ML",
        skills: &["Scikit-learn", "Hugging Face", "OpenCV", "NLP", "TensorFlow"],
    },
    SkillGroup {
        category: "Databases",
        skills: &["MySQL", "MariaDB", "PostgreSQL"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
    Location,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INTRO: &str = "Saya terbuka untuk kesempatan kerja penuh waktu atau freelance di bidang Data Science, AI, atau IoT. Jika Anda memiliki proyek menarik atau tawaran pekerjaan, jangan ragu untuk menghubungi saya.";

pub const CONTACT_ITEMS: [ContactItem; 4] = [
    ContactItem {
        kind: ContactKind::Email,
        text: EMAIL,
        href: Some("mailto:azhardzakwanazizi@gmail.com"),
    },
    ContactItem {
        kind: ContactKind::LinkedIn,
        text: "linkedin.com/in/azhardzakwan",
        href: Some(LINKEDIN_URL),
    },
    ContactItem {
        kind: ContactKind::GitHub,
        text: "github.com/elite789",
        href: Some(GITHUB_URL),
    },
    ContactItem {
        kind: ContactKind::Location,
        text: LOCATION,
        href: None,
    },
];

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// Prompt asking for a recruiter-friendly Challenge / Solution / Impact breakdown of one project.
pub fn insight_prompt(project: &Project) -> String {
    format!(
        "Analisis proyek teknis berikut ini secara singkat (maksimal 3 kalimat poin-poin). Jelaskan \"Technical Challenge\", \"Solution\", dan \"Impact\" agar mudah dimengerti recruiter. Proyek: {}. Konteks: {}",
        project.title, project.full_context
    )
}
