pub fn render_index(goal: f64) -> String {
    INDEX_HTML.replace("{{GOAL}}", &format_goal(goal))
}

fn format_goal(goal: f64) -> String {
    if goal.fract() == 0.0 {
        format!("{goal:.0}")
    } else {
        goal.to_string()
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #c9dcef;
      --ink: #22303c;
      --good: #2d7a4b;
      --warn: #d9822b;
      --bad: #c63b2b;
      --accent: #2f6fb0;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(34, 48, 60, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3edf6 60%, #f4f7fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5c6873;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(34, 48, 60, 0.08);
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8891;
    }

    .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(34, 48, 60, 0.07);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      font-weight: 600;
      color: #66717b;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
    }

    .hidden {
      display: none !important;
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    input, select {
      font: inherit;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid rgba(34, 48, 60, 0.2);
    }

    button.action {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.attended { background: #dff1e6; color: var(--good); }
    button.missed { background: #f8e0dc; color: var(--bad); }
    button.quiet { background: #eceff2; color: #55606a; }

    .cards {
      display: grid;
      gap: 14px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(34, 48, 60, 0.08);
      display: grid;
      gap: 10px;
    }

    .card-head {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    .card h3 {
      margin: 0;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: #e4e9ee;
      overflow: hidden;
    }

    .bar > div {
      height: 100%;
      border-radius: 999px;
    }

    .on_track { color: var(--good); }
    .at_risk { color: var(--bad); }
    .no_data { color: #7d8891; }

    .card .buttons {
      display: flex;
      gap: 8px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
    }

    th, td {
      text-align: left;
      padding: 12px 16px;
      border-bottom: 1px solid #edf0f3;
    }

    .status {
      min-height: 1.2em;
      color: #5c6873;
    }

    .status[data-type="error"] { color: var(--bad); }
    .status[data-type="ok"] { color: var(--good); }

    .empty {
      color: #7d8891;
      margin: 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Attendance Tracker</h1>
      <p class="subtitle">Mark each class, watch your goal, get a reminder before class starts.</p>
    </header>

    <section class="panel">
      <label class="stat">
        <span class="label">Goal (%)</span>
        <input id="goal" type="number" min="0" max="100" step="any" value="{{GOAL}}" />
      </label>
      <div class="stat">
        <span class="label">Overall</span>
        <span class="value" id="overall">--</span>
      </div>
      <div class="stat">
        <span class="label">On track</span>
        <span class="value on_track" id="on-track">0</span>
      </div>
      <div class="stat">
        <span class="label">At risk</span>
        <span class="value at_risk" id="at-risk">0</span>
      </div>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="attendance">Attendance</button>
      <button class="tab" type="button" data-tab="schedule">Schedule</button>
    </div>

    <section id="content-attendance" class="cards">
      <form id="subject-form" class="inline">
        <input id="subject-name" placeholder="Subject name" required />
        <button class="action" type="submit">Add subject</button>
      </form>
      <p id="no-subjects" class="empty">No subjects yet. Add one to start tracking.</p>
      <div id="subject-list" class="cards"></div>
    </section>

    <section id="content-schedule" class="cards hidden">
      <form id="schedule-form" class="inline">
        <select id="schedule-subject" required></select>
        <select id="schedule-day" required>
          <option>Monday</option><option>Tuesday</option><option>Wednesday</option>
          <option>Thursday</option><option>Friday</option><option>Saturday</option>
          <option>Sunday</option>
        </select>
        <input id="schedule-time" type="time" required />
        <button class="action" type="submit">Add class</button>
      </form>
      <p id="no-schedule" class="empty">No classes scheduled.</p>
      <table id="schedule-table" class="hidden">
        <thead><tr><th>Subject</th><th>Day</th><th>Time</th><th></th></tr></thead>
        <tbody id="schedule-body"></tbody>
      </table>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const goalEl = document.getElementById('goal');
    const subjectList = document.getElementById('subject-list');
    const scheduleBody = document.getElementById('schedule-body');
    const scheduleSubject = document.getElementById('schedule-subject');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) node.className = className;
      if (text !== undefined) node.textContent = text;
      return node;
    };

    const button = (className, label, onClick) => {
      const node = el('button', className, label);
      node.type = 'button';
      node.addEventListener('click', () => onClick().catch((err) => setStatus(err.message, 'error')));
      return node;
    };

    const renderSubjects = (overview) => {
      subjectList.replaceChildren();
      document.getElementById('no-subjects').classList.toggle('hidden', overview.subjects.length > 0);
      document.getElementById('overall').textContent =
        overview.overall_percentage === null ? '--' : `${overview.overall_percentage.toFixed(1)}%`;
      document.getElementById('on-track').textContent = overview.on_track;
      document.getElementById('at-risk').textContent = overview.at_risk;

      scheduleSubject.replaceChildren();
      overview.subjects.forEach((subject) => {
        const option = el('option', '', subject.name);
        option.value = subject.name;
        scheduleSubject.appendChild(option);

        const card = el('div', 'card');
        const head = el('div', 'card-head');
        const title = el('div');
        title.appendChild(el('h3', '', subject.name));
        title.appendChild(el('span', 'label', `Attended ${subject.attended} of ${subject.total}`));
        head.appendChild(title);
        head.appendChild(el('span', `value ${subject.status}`, `${subject.percentage.toFixed(1)}%`));

        const bar = el('div', 'bar');
        const fill = el('div');
        fill.style.width = `${subject.percentage}%`;
        fill.style.background = subject.status === 'on_track' ? 'var(--good)' : 'var(--warn)';
        bar.appendChild(fill);

        const buttons = el('div', 'buttons');
        buttons.appendChild(button('action attended', '+ Attended', () => mutate('POST', `/api/subjects/${subject.index}/attended`)));
        buttons.appendChild(button('action missed', '- Missed', () => mutate('POST', `/api/subjects/${subject.index}/missed`)));
        buttons.appendChild(button('action quiet', 'Reset', async () => {
          const preview = await api('GET', `/api/subjects/${subject.index}/reset`);
          if (confirm(`Are you sure you want to reset attendance for "${preview.name}"?`)) {
            await mutate('POST', `/api/subjects/${subject.index}/reset`, { confirm: true });
          }
        }));
        buttons.appendChild(button('action quiet', 'Delete', async () => {
          const preview = await api('GET', `/api/subjects/${subject.index}/remove`);
          const extra = preview.schedule_entries > 0
            ? ` This will also remove ${preview.schedule_entries} class(es) from your schedule.`
            : '';
          if (confirm(`Are you sure you want to delete "${preview.subject.name}"?${extra}`)) {
            await mutate('POST', `/api/subjects/${subject.index}/remove`, { confirm: true });
          }
        }));

        card.append(head, bar, el('p', subject.status, subject.message), buttons);
        subjectList.appendChild(card);
      });
    };

    const renderSchedule = (rows) => {
      scheduleBody.replaceChildren();
      document.getElementById('no-schedule').classList.toggle('hidden', rows.length > 0);
      document.getElementById('schedule-table').classList.toggle('hidden', rows.length === 0);
      rows.forEach((row) => {
        const tr = el('tr');
        tr.append(el('td', '', row.subject), el('td', '', row.day), el('td', '', row.time));
        const cell = el('td');
        cell.appendChild(button('action quiet', 'Remove', async () => {
          if (confirm('Are you sure you want to remove this class from the schedule?')) {
            await mutate('POST', `/api/schedule/${row.index}/remove`, { confirm: true });
          }
        }));
        tr.appendChild(cell);
        scheduleBody.appendChild(tr);
      });
    };

    const refresh = async () => {
      const [overview, schedule] = await Promise.all([
        api('GET', '/api/overview'),
        api('GET', '/api/schedule')
      ]);
      renderSubjects(overview);
      renderSchedule(schedule);
    };

    const mutate = async (method, url, body) => {
      setStatus('Saving...', 'info');
      await api(method, url, body);
      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const pollNotifications = async () => {
      const intents = await api('GET', '/api/notifications');
      intents.forEach((intent) => {
        if ('Notification' in window && Notification.permission === 'granted') {
          new Notification('Upcoming Class!', { body: `${intent.subject} class is starting at ${intent.time}.` });
        } else {
          setStatus(`${intent.subject} class is starting at ${intent.time}.`, 'ok');
        }
      });
    };

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => {
        tabs.forEach((other) => other.classList.toggle('active', other === tab));
        ['attendance', 'schedule'].forEach((name) => {
          document.getElementById(`content-${name}`).classList.toggle('hidden', name !== tab.dataset.tab);
        });
      });
    });

    document.getElementById('subject-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('subject-name');
      mutate('POST', '/api/subjects', { name: input.value })
        .then(() => { input.value = ''; })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('schedule-form').addEventListener('submit', (event) => {
      event.preventDefault();
      mutate('POST', '/api/schedule', {
        subject: scheduleSubject.value,
        day: document.getElementById('schedule-day').value,
        time: document.getElementById('schedule-time').value
      }).catch((err) => setStatus(err.message, 'error'));
    });

    goalEl.addEventListener('change', () => {
      mutate('POST', '/api/goal', { goal: parseFloat(goalEl.value) })
        .catch((err) => setStatus(err.message, 'error'));
    });

    if ('Notification' in window && Notification.permission === 'default') {
      Notification.requestPermission();
    }

    refresh().catch((err) => setStatus(err.message, 'error'));
    setInterval(() => pollNotifications().catch(() => {}), 20000);
  </script>
</body>
</html>
"#;
