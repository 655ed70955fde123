//! Plain-text panel views for the console front end.

use vault_data::{EntryKind, QuestStatus, Snapshot, TimelineMode};
use vault_session::PanelViews;
use vault_terminal::PanelData;

/// Renders every panel kind as a block of text lines.
pub struct TextViews {
    /// Column at which long prose is wrapped.
    pub width: usize,
}

impl Default for TextViews {
    fn default() -> Self {
        Self { width: 76 }
    }
}

/// Greedy word wrap, indented by `indent` spaces.
fn wrap(text: &str, indent: usize, width: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let room = width.saturating_sub(indent).max(10);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > room {
            lines.push(format!("{pad}{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(format!("{pad}{current}"));
    }
    lines
}

fn header(title: &str) -> Vec<String> {
    vec![format!("[ {title} ]"), String::new()]
}

fn section(title: &str) -> String {
    format!("-- {title} --")
}

/// Fixed-width bar, `value` out of `max`.
fn bar(value: u32, max: u32, cells: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * cells) / max as usize
    };
    format!("{}{}", "#".repeat(filled), ".".repeat(cells - filled))
}

fn timeline_icon(kind: EntryKind) -> char {
    match kind {
        EntryKind::Quest => '!',
        EntryKind::Location => '@',
        EntryKind::Combat => 'x',
        EntryKind::Journal => '~',
        EntryKind::Milestone => '*',
        EntryKind::Other => '-',
    }
}

impl TextViews {
    fn special_block(s: &Snapshot) -> Vec<String> {
        s.special
            .entries()
            .into_iter()
            .map(|(name, value)| {
                format!(
                    "  {} {:<13}{:>2} {}",
                    &name[..1],
                    name.to_uppercase(),
                    value,
                    bar(value.into(), 10, 10)
                )
            })
            .collect()
    }

    fn location_detail(&self, s: &Snapshot, id: &str) -> Vec<String> {
        let Some(loc) = s.location(id) else {
            return vec![format!("Location \"{id}\" not found.")];
        };
        let mut out = header("LOCATION ARCHIVE");
        out.push(loc.name.to_uppercase());
        out.extend(wrap(&loc.summary, 2, self.width));
        out.push(String::new());
        out.push(format!("First Arrival: {}", loc.first_arrival));
        out.push(format!("Tags: {}", loc.tags.join(", ")));
        if !loc.events.is_empty() {
            out.push(String::new());
            out.push(section("KEY EVENTS"));
            for event in &loc.events {
                out.push(format!("  * {}", event.title));
                out.extend(wrap(&event.description, 4, self.width));
            }
        }
        if !loc.npcs.is_empty() {
            out.push(String::new());
            out.push(section("NOTABLE NPCS"));
            out.extend(loc.npcs.iter().map(|n| format!("  {}: {}", n.name, n.note)));
        }
        let c = &loc.consequences;
        if c.karma != 0 || !c.reputation.is_empty() {
            out.push(String::new());
            out.push(section("CONSEQUENCES"));
            if c.karma != 0 {
                out.push(format!("  Karma Change: {:+}", c.karma));
            }
            out.extend(
                c.reputation
                    .iter()
                    .map(|(faction, delta)| format!("  {faction}: {delta:+}")),
            );
        }
        out
    }

    fn location_index(&self, s: &Snapshot) -> Vec<String> {
        let mut out = header("LOCATION ARCHIVE");
        let visited = s.visited_location_count();
        out.push(format!(
            "ALL ({})  VISITED ({})  UNVISITED ({})",
            s.locations.len(),
            visited,
            s.locations.len() - visited
        ));
        for loc in s.locations.values() {
            out.push(String::new());
            let tags: Vec<&str> = loc.tags.iter().take(3).map(String::as_str).collect();
            out.push(format!("{}  [{}]", loc.name, tags.join("] [")));
            out.extend(wrap(&loc.summary, 2, self.width));
            if loc.visited {
                out.push(format!("  First Visit: {}", loc.first_arrival));
            }
        }
        out
    }
}

impl PanelViews for TextViews {
    type Output = Vec<String>;

    fn id(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let serial: String = s.character.origin.split_whitespace().collect();
        let mut out = vec![
            "VAULT-TEC  IDENTIFICATION CARD".to_string(),
            format!("SERIAL: VT-{serial}"),
            String::new(),
            format!("NAME:       {}", s.character.name),
            format!("ORIGIN:     {}", s.character.origin),
            format!("BACKGROUND: {}", s.character.background),
            format!("AGE:        {} years", s.character.age),
            format!("PRONOUNS:   {}", s.character.pronouns),
            format!("LEVEL:      {}", s.stats.level),
            String::new(),
            format!("KARMA:      {}", s.relations.karma),
            "REPUTATION:".to_string(),
        ];
        out.extend(
            s.relations
                .factions
                .iter()
                .take(3)
                .map(|f| format!("  {}: {}", f.name, f.reputation)),
        );
        out.extend([
            String::new(),
            "|||||| || |||| ||| || |||||| || ||| || ||||".to_string(),
            "PROPERTY OF VAULT-TEC CORPORATION    [AUTHORIZED]".to_string(),
        ]);
        out
    }

    fn dossier(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let mut out = header("CHARACTER DOSSIER");
        out.push(s.character.name.to_uppercase());
        out.extend(wrap(&s.character.tagline, 2, self.width));
        out.push(String::new());
        out.push(format!(
            "LEVEL {}  |  HP {}/{}  |  {}",
            s.stats.level, s.stats.hp, s.stats.max_hp, s.current_location
        ));
        if !s.stream_highlights.is_empty() {
            out.push(String::new());
            out.push(section("STREAM HIGHLIGHTS"));
            out.extend(s.stream_highlights.iter().map(|h| format!("  > {h}")));
        }
        out.push(String::new());
        out.push(section("S.P.E.C.I.A.L."));
        out.extend(Self::special_block(s));
        out.push(String::new());
        out.push(section("TOP SKILLS"));
        out.extend(
            s.skills
                .iter()
                .take(5)
                .map(|sk| format!("  {:<16}{:>3}% {}", sk.name, sk.value, bar(sk.value, 100, 20))),
        );
        out
    }

    fn sheet(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let mut out = header("CHARACTER SHEET");
        out.push(section("S.P.E.C.I.A.L. ATTRIBUTES"));
        out.extend(Self::special_block(s));
        out.push(String::new());
        out.push(section("SKILLS"));
        for sk in &s.skills {
            let mark = if sk.tag.is_some() { '+' } else { ' ' };
            out.push(format!("  {mark}{:<16}{:>3}%", sk.name, sk.value));
        }
        if !s.perks.is_empty() {
            out.push(String::new());
            out.push(section("PERKS"));
            for perk in &s.perks {
                out.push(format!("  {} (Rank {})", perk.name, perk.rank));
                out.extend(wrap(&perk.description, 4, self.width));
            }
        }
        if !s.traits.is_empty() {
            out.push(String::new());
            out.push(section("TRAITS"));
            for t in &s.traits {
                out.push(format!("  {}", t.name));
                out.extend(wrap(&t.description, 4, self.width));
            }
        }
        let st = &s.stats;
        out.extend([
            String::new(),
            section("DERIVED STATS"),
            format!("  Hit Points:      {}/{}", st.hp, st.max_hp),
            format!("  Action Points:   {}/{}", st.ap, st.max_ap),
            format!("  Armor Class:     {}", st.ac),
            format!("  Sequence:        {}", st.sequence),
            format!("  Healing Rate:    {}", st.healing_rate),
            format!("  Critical Chance: {}%", st.critical_chance),
        ]);
        out
    }

    fn map(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let map = &s.map;
        let mut out = header("WORLD MAP");
        for pin in &map.locations {
            let mark = if pin.visited { '#' } else { 'o' };
            out.push(format!(
                "  {mark} {:<20} ({:>2},{:>2})  {}",
                pin.name, pin.x, pin.y, pin.kind
            ));
        }
        if !map.route.is_empty() {
            let mut stops: Vec<_> = map.route.iter().collect();
            stops.sort_by_key(|r| r.order);
            let names: Vec<&str> = stops
                .iter()
                .map(|r| {
                    map.locations
                        .iter()
                        .find(|p| p.id == r.location_id)
                        .map_or(r.location_id.as_str(), |p| p.name.as_str())
                })
                .collect();
            out.push(String::new());
            out.push(format!("Travel Route: {}", names.join(" -> ")));
        }
        let visited = map.visited_count();
        out.extend([
            String::new(),
            "# Visited Location   o Unvisited Location".to_string(),
            format!(
                "Total: {}  Visited: {}  Unvisited: {}",
                map.locations.len(),
                visited,
                map.locations.len() - visited
            ),
        ]);
        out
    }

    fn locations(&self, data: &PanelData) -> Vec<String> {
        match data.selected_location.as_deref() {
            Some(id) => self.location_detail(&data.snapshot, id),
            None => self.location_index(&data.snapshot),
        }
    }

    fn timeline(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let mode = data.timeline_mode.unwrap_or(TimelineMode::Full);
        let entries = s.timeline.filtered(mode);
        let mut out = header(&format!("TIMELINE - {mode}"));
        out.push(format!("Mode: {}", mode.blurb()));
        for entry in &entries {
            out.push(String::new());
            out.push(format!(
                "{} {}  {}  {}",
                timeline_icon(entry.kind),
                entry.date,
                entry.kind.label(),
                entry.title
            ));
            out.extend(wrap(&entry.short_summary, 4, self.width));
        }
        out.push(String::new());
        out.push(format!(
            "Showing {} of {} events",
            entries.len(),
            s.timeline.entries.len()
        ));
        out
    }

    fn quests(&self, data: &PanelData) -> Vec<String> {
        let s = &data.snapshot;
        let mut out = header("QUEST LOG");
        out.push(format!(
            "Active: {}  Completed: {}  Failed: {}",
            s.quest_count(QuestStatus::Active),
            s.quest_count(QuestStatus::Completed),
            s.quest_count(QuestStatus::Failed)
        ));
        let groups = [
            ("HIGHLIGHTS", None),
            ("ACTIVE QUESTS", Some(QuestStatus::Active)),
            ("COMPLETED QUESTS", Some(QuestStatus::Completed)),
            ("FAILED QUESTS", Some(QuestStatus::Failed)),
        ];
        for (title, status) in groups {
            let quests: Vec<_> = s
                .quests
                .iter()
                .filter(|q| match status {
                    Some(st) => q.status == st,
                    None => q.highlight,
                })
                .collect();
            if quests.is_empty() {
                continue;
            }
            out.push(String::new());
            out.push(section(title));
            for q in quests {
                out.push(format!("  {} [{}]", q.name, q.status.label()));
                out.extend(wrap(&q.description, 4, self.width));
                if let Some(outcome) = &q.outcome {
                    out.extend(wrap(&format!("Outcome: {outcome}"), 4, self.width));
                }
                if status.is_none() && !q.linked_locations.is_empty() {
                    out.push(format!(
                        "    Related Locations: {}",
                        q.linked_locations.join(", ")
                    ));
                }
            }
        }
        out
    }

    fn inventory(&self, data: &PanelData) -> Vec<String> {
        let inv = &data.snapshot.inventory;
        let mut out = header("INVENTORY");
        out.push(section("EQUIPPED"));
        out.extend(
            inv.equipped
                .iter()
                .map(|i| format!("  {:<8}{}  (PID {})", i.slot, i.name, i.pid)),
        );
        out.push(String::new());
        out.push(section("NOTABLE ITEMS"));
        for item in &inv.notable {
            out.push(format!("  {} x{}  (PID {})", item.name, item.quantity, item.pid));
            if !item.note.is_empty() {
                out.push(format!("    {}", item.note));
            }
        }
        out.push(String::new());
        out.push(format!(
            "Total Equipped: {}  Notable Items: {}",
            inv.equipped.len(),
            inv.notable.len()
        ));
        out
    }

    fn journal(&self, data: &PanelData) -> Vec<String> {
        let journal = &data.snapshot.journal;
        let mut out = header("PERSONAL JOURNAL");
        out.push("In-character reflections and observations from the wasteland.".to_string());
        out.push(format!("Entries: {}", journal.len()));
        for entry in journal {
            out.push(String::new());
            let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{t}")).collect();
            out.push(format!("{}  {}", entry.date, tags.join(" ")));
            out.extend(wrap(&entry.entry, 2, self.width));
        }
        out
    }

    fn relations(&self, data: &PanelData) -> Vec<String> {
        let rel = &data.snapshot.relations;
        let mut out = header("FACTION RELATIONS");
        out.push(format!("Overall Karma: {}", rel.karma));
        out.push(String::new());
        out.push(section("FACTION STANDINGS"));
        for f in &rel.factions {
            // Standing runs -100..=100.
            let normalized = (f.standing.clamp(-100, 100) + 100) as u32 / 2;
            out.push(format!(
                "  {:<22}{:<10}{} {:+}",
                f.name,
                f.reputation,
                bar(normalized, 100, 20),
                f.standing
            ));
        }
        out.extend([
            String::new(),
            "Idolized (75+)  Liked (25-74)  Neutral (-24 to 24)".to_string(),
            "Disliked (-25 to -74)  Hated (-75 or less)".to_string(),
        ]);
        out
    }

    fn unknown(&self, tag: &str) -> Vec<String> {
        vec![format!("Unknown panel type: {tag}")]
    }
}
