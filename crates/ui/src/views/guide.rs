use dioxus::prelude::*;

const GUIDE: [(&str, &str); 5] = [
    (
        "1. Vision & Power Goals",
        "Define your North Star (one big SMART goal). Break it down into 12 annual Power Goals. \
         Identify the single \"High Impact\" project to focus on now and define your daily next step (MINS).",
    ),
    (
        "2. Time & Energy Audit",
        "Log activities every 15 minutes. Label tasks Green (Energizing) or Red (Draining). \
         Aim to Delete, Delegate, or Leverage the \"Red\" tasks to free up your schedule for high-value work.",
    ),
    (
        "3. Daily Mastery",
        "Night-Before Design: Plan 3 key tasks. First 90 Mins: Attack your #1 task with zero distractions. \
         Pomodoro: Work in 25-minute intense sprints. Review goals 3x daily.",
    ),
    (
        "4. Leverage (4 C's)",
        "Multiply your output. Code: Automate with AI/Software. Content: Build SOPs/Checklists. \
         Capital: Buy back time. Collaboration: Delegate using the 10/80/10 rule.",
    ),
    (
        "5. Scorecard & Environment",
        "Track one North Star Metric religiously. Set a high-stakes consequence for failure to ensure accountability. \
         Audit your circle: spend more time with \"Energy Amplifiers\" and cut out \"Energy Vampires\".",
    ),
];

#[component]
pub fn Guide() -> Element {
    rsx! {
        section { class: "guide",
            div { class: "guide__header",
                h2 { "Quick Reference Guide" }
                p { "How to use each template effectively" }
            }
            div { class: "guide__grid",
                for (title, body) in GUIDE {
                    div { key: "{title}", class: "guide__entry",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
