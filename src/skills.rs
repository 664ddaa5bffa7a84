macro_rules! devicon {
    ($path:literal) => {
        concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons", $path)
    };
}

pub const FALLBACK_ICON: &str = "/icons/tool.svg";
pub const AWS_ICON: &str = "/icons/aws.svg";

pub const SKILLS: [&str; 21] = [
    "Pandas",
    "Vite",
    "Tailwind",
    "CSS",
    "Typescript",
    "HTML",
    "JavaScript",
    "C++",
    "C",
    "Java",
    "OpenCV",
    "Flask",
    "TensorFlow",
    "SQL",
    "AWS Lambda",
    "AWS DynamoDB",
    "AWS S3",
    "AWS API Gateway",
    "AWS Strands",
    "Kotlin",
    "Python",
];

/// Icon locator for a skill, or `None` when no icon is known. Every AWS
/// service shares the local AWS mark.
pub fn icon_url(skill: &str) -> Option<&'static str> {
    if skill.to_uppercase().starts_with("AWS") {
        return Some(AWS_ICON);
    }

    let url = match skill {
        "Pandas" => "https://cdn.simpleicons.org/pandas/ffffff",
        "Vite" => devicon!("/vitejs/vitejs-original.svg"),
        "Tailwind" => devicon!("/tailwindcss/tailwindcss-original.svg"),
        "CSS" => devicon!("/css3/css3-original.svg"),
        "Typescript" => devicon!("/typescript/typescript-original.svg"),
        "HTML" => devicon!("/html5/html5-original.svg"),
        "JavaScript" => devicon!("/javascript/javascript-original.svg"),
        "C++" => devicon!("/cplusplus/cplusplus-original.svg"),
        "C" => devicon!("/c/c-original.svg"),
        "Java" => devicon!("/java/java-original.svg"),
        "OpenCV" => devicon!("/opencv/opencv-original.svg"),
        "Flask" => devicon!("/flask/flask-original.svg"),
        "TensorFlow" => devicon!("/tensorflow/tensorflow-original.svg"),
        "SQL" => devicon!("/mysql/mysql-original.svg"),
        "Kotlin" => devicon!("/kotlin/kotlin-original.svg"),
        "Python" => devicon!("/python/python-original.svg"),
        _ => return None,
    };

    Some(url)
}

pub fn icon_src(skill: &str) -> &'static str {
    icon_url(skill).unwrap_or_else(|| {
        tracing::debug!(skill, "no icon for skill, using fallback");
        FALLBACK_ICON
    })
}

/// Replacement for an image whose load failed, or `None` when the failing
/// source already is the fallback.
pub fn fallback_for_failed(failed_src: &str) -> Option<&'static str> {
    if failed_src.ends_with(FALLBACK_ICON) {
        None
    } else {
        Some(FALLBACK_ICON)
    }
}

/// Remote icon URLs worth warming up, de-duplicated, in skill order.
pub fn preload_urls() -> Vec<&'static str> {
    let mut urls: Vec<&'static str> = Vec::new();

    for url in SKILLS.iter().filter_map(|skill| icon_url(skill)) {
        if url.starts_with('/') || urls.contains(&url) {
            continue;
        }
        urls.push(url);
    }

    urls
}
