//! Static log viewer served at `/_logs`.

pub const LOG_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Proxy Log Viewer</title>
<meta charset="UTF-8">
<style>
body{font-family:sans-serif;margin:20px;background:#f5f5f5}
.container{max-width:1200px;margin:auto;background:white;padding:20px;border-radius:10px}
.header{background:#4a6fa5;color:white;padding:20px;border-radius:8px;margin-bottom:20px}
.controls{margin-bottom:20px;display:flex;gap:10px;align-items:center}
select,button{padding:10px;border:1px solid #ddd;border-radius:5px}
button{background:#4a6fa5;color:white;border:none;cursor:pointer}
.logs{max-height:500px;overflow-y:auto}
.log-entry{padding:15px;margin-bottom:10px;background:#f8f9fa;border-left:4px solid #4a6fa5;border-radius:5px}
.log-entry pre{margin:6px 0 0;white-space:pre-wrap;word-break:break-all}
.total{margin-left:auto;color:#666}
</style>
</head>
<body>
<div class="container">
<div class="header"><h1>Proxy Log Viewer</h1></div>
<div class="controls">
<select id="limit"><option value="50">50 entries</option><option value="100" selected>100 entries</option></select>
<button onclick="loadLogs()">Refresh</button>
<button onclick="clearLogs()">Clear</button>
<label><input type="checkbox" id="autoRefresh" checked> Auto-refresh (5s)</label>
<span class="total" id="total"></span>
</div>
<div class="logs" id="logs">Loading...</div>
</div>
<script>
function esc(s){
  return String(s).replace(/[&<>"']/g,c=>({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
}
async function loadLogs(){
  const limit=document.getElementById('limit').value;
  const res=await fetch('/_logs/api?limit='+encodeURIComponent(limit));
  const body=await res.json();
  if(!body.success)return;
  document.getElementById('total').textContent=body.total+' stored';
  document.getElementById('logs').innerHTML=body.data.length?body.data.map(log=>
    `<div class="log-entry">
      <strong>${esc(log.time)}</strong><br>
      <strong>IP:</strong> ${esc(log.ip)}<br>
      <strong>Message:</strong> ${esc(log.msg)}
      ${log.data?'<pre>'+esc(JSON.stringify(log.data))+'</pre>':''}
    </div>`
  ).join(''):'No entries.';
}
async function clearLogs(){
  await fetch('/_logs/clear',{method:'POST'});
  loadLogs();
}
let interval;
function setupAutoRefresh(){
  if(interval)clearInterval(interval);
  interval=null;
  if(document.getElementById('autoRefresh').checked){
    interval=setInterval(loadLogs,5000);
  }
}
document.getElementById('autoRefresh').onchange=setupAutoRefresh;
document.getElementById('limit').onchange=loadLogs;
loadLogs();
setupAutoRefresh();
</script>
</body>
</html>
"#;
