//! Built-in armybox applet catalog.
//!
//! Entries are listed in the order the applet directory presents them; that
//! order is the canonical tie-break for every derived grouping.

/// Category labels offered by the selector, in display order.
pub const CATEGORIES: &[&str] = &[
    "File Operations",
    "Text Processing",
    "Archiving",
    "System Info",
    "Process Management",
    "Networking",
    "Checksums & Encoding",
    "Shell",
    "Init System",
    "Hardware",
    "Package Management",
    "Terminal Multiplexer",
    "Misc",
];

/// `(name, description, category)` triples for every built-in applet.
pub const APPLETS: &[(&str, &str, &str)] = &[
    ("basename", "Strip directory", "File Operations"),
    ("cat", "Concatenate files", "File Operations"),
    ("cd", "Change directory", "File Operations"),
    ("chattr", "Change file attributes", "File Operations"),
    ("chgrp", "Change file group", "File Operations"),
    ("chmod", "Change file mode", "File Operations"),
    ("chown", "Change file owner", "File Operations"),
    ("cp", "Copy files", "File Operations"),
    ("dd", "Convert and copy files", "File Operations"),
    ("dirname", "Strip filename", "File Operations"),
    ("fallocate", "Preallocate file space", "File Operations"),
    ("file", "Determine file type", "File Operations"),
    ("find", "Search files", "File Operations"),
    ("fstype", "Print filesystem type", "File Operations"),
    ("install", "Copy and set attributes", "File Operations"),
    ("link", "Create hard link", "File Operations"),
    ("ln", "Create links", "File Operations"),
    ("ls", "List directory contents", "File Operations"),
    ("lsattr", "List file attributes", "File Operations"),
    ("makedevs", "Create device nodes", "File Operations"),
    ("mkdir", "Create directories", "File Operations"),
    ("mkfifo", "Create named pipe", "File Operations"),
    ("mknod", "Create special files", "File Operations"),
    ("mktemp", "Create temp file", "File Operations"),
    ("mv", "Move files", "File Operations"),
    ("patch", "Apply unified diff", "File Operations"),
    ("pwd", "Print working directory", "File Operations"),
    ("readlink", "Read symbolic link", "File Operations"),
    ("realpath", "Resolve path", "File Operations"),
    ("rm", "Remove files", "File Operations"),
    ("rmdir", "Remove directories", "File Operations"),
    ("setfattr", "Set file attributes", "File Operations"),
    ("shred", "Secure delete", "File Operations"),
    ("split", "Split file", "File Operations"),
    ("stat", "Display file status", "File Operations"),
    ("sync", "Sync filesystems", "File Operations"),
    ("touch", "Update timestamps", "File Operations"),
    ("truncate", "Shrink/extend file", "File Operations"),
    ("unlink", "Remove file", "File Operations"),
    ("xargs", "Build commands from stdin", "File Operations"),
    ("awk", "Pattern processing", "Text Processing"),
    ("base32", "Base32 encode/decode", "Text Processing"),
    ("base64", "Base64 encode/decode", "Text Processing"),
    ("comm", "Compare files", "Text Processing"),
    ("cut", "Cut fields", "Text Processing"),
    ("dos2unix", "DOS to Unix newlines", "Text Processing"),
    ("echo", "Display text", "Text Processing"),
    ("egrep", "Extended regex grep", "Text Processing"),
    ("expand", "Tabs to spaces", "Text Processing"),
    ("fgrep", "Fixed string grep", "Text Processing"),
    ("fmt", "Reformat paragraphs", "Text Processing"),
    ("fold", "Wrap lines", "Text Processing"),
    ("grep", "Search patterns", "Text Processing"),
    ("head", "Output first lines", "Text Processing"),
    ("iconv", "Convert character encoding", "Text Processing"),
    ("nl", "Number lines", "Text Processing"),
    ("paste", "Merge lines", "Text Processing"),
    ("printf", "Format output", "Text Processing"),
    ("rev", "Reverse lines", "Text Processing"),
    ("sed", "Stream editor", "Text Processing"),
    ("seq", "Print sequences", "Text Processing"),
    ("sort", "Sort lines", "Text Processing"),
    ("strings", "Print strings", "Text Processing"),
    ("tac", "Reverse file", "Text Processing"),
    ("tail", "Output last lines", "Text Processing"),
    ("tee", "Duplicate output", "Text Processing"),
    ("tr", "Translate characters", "Text Processing"),
    ("tsort", "Topological sort", "Text Processing"),
    ("unexpand", "Spaces to tabs", "Text Processing"),
    ("uniq", "Filter duplicates", "Text Processing"),
    ("unix2dos", "Unix to DOS newlines", "Text Processing"),
    ("vi", "Visual text editor", "Text Processing"),
    ("view", "Read-only vi", "Text Processing"),
    ("wc", "Word count", "Text Processing"),
    ("yes", "Output repeatedly", "Text Processing"),
    ("acpi", "ACPI power info", "System Info"),
    ("arch", "Print architecture", "System Info"),
    ("blkdiscard", "Discard sectors on device", "System Info"),
    ("blkid", "Block device attributes", "System Info"),
    ("blockdev", "Block device operations", "System Info"),
    ("cal", "Display calendar", "System Info"),
    ("chroot", "Change root directory", "System Info"),
    ("chrt", "Real-time attributes", "System Info"),
    ("chvt", "Change virtual terminal", "System Info"),
    ("date", "Display date/time", "System Info"),
    ("deallocvt", "Deallocate virtual terminal", "System Info"),
    ("devmem", "Access physical memory", "System Info"),
    ("df", "Disk free space", "System Info"),
    ("dmesg", "Kernel messages", "System Info"),
    ("dnsdomainname", "Show DNS domain name", "System Info"),
    ("du", "Disk usage", "System Info"),
    ("env", "Environment", "System Info"),
    ("fgconsole", "Active VT", "System Info"),
    ("flock", "Manage file locks", "System Info"),
    ("free", "Memory usage", "System Info"),
    ("freeramdisk", "Free ramdisk memory", "System Info"),
    ("fsfreeze", "Freeze filesystem", "System Info"),
    ("fsync", "Synchronize file state", "System Info"),
    ("getconf", "Get config values", "System Info"),
    ("getopt", "Parse command options", "System Info"),
    ("groups", "Print groups", "System Info"),
    ("halt", "Stop system", "System Info"),
    ("hostid", "Host identifier", "System Info"),
    ("hostname", "System hostname", "System Info"),
    ("hwclock", "Hardware clock", "System Info"),
    ("id", "User/group IDs", "System Info"),
    ("insmod", "Insert kernel module", "System Info"),
    ("ionice", "Set I/O scheduling class", "System Info"),
    ("iorenice", "Change I/O priority", "System Info"),
    ("iotop", "I/O monitor", "System Info"),
    ("linux32", "Change execution domain", "System Info"),
    ("logger", "Log messages", "System Info"),
    ("logname", "Login name", "System Info"),
    ("losetup", "Set up loop devices", "System Info"),
    ("lsmod", "List modules", "System Info"),
    ("modinfo", "Module information", "System Info"),
    ("modprobe", "Add/remove modules", "System Info"),
    ("mount", "Mount filesystems", "System Info"),
    ("mountpoint", "Check mount point", "System Info"),
    ("nice", "Run with priority", "System Info"),
    ("nohup", "Ignore hangups", "System Info"),
    ("nproc", "CPU count", "System Info"),
    ("openvt", "Open virtual terminal", "System Info"),
    ("partprobe", "Inform kernel of partition changes", "System Info"),
    ("pivot_root", "Change root filesystem", "System Info"),
    ("poweroff", "Power off system", "System Info"),
    ("printenv", "Print environment", "System Info"),
    ("readahead", "Preload files into cache", "System Info"),
    ("reboot", "Reboot system", "System Info"),
    ("rfkill", "Control wireless devices", "System Info"),
    ("rmmod", "Remove kernel module", "System Info"),
    ("rtcwake", "RTC alarm wakeup", "System Info"),
    ("swapoff", "Disable swap", "System Info"),
    ("swapon", "Enable swap", "System Info"),
    ("sysctl", "System params", "System Info"),
    ("taskset", "Set/get CPU affinity", "System Info"),
    ("timeout", "Run with timeout", "System Info"),
    ("top", "Process monitor", "System Info"),
    ("tty", "Print terminal", "System Info"),
    ("umount", "Unmount filesystems", "System Info"),
    ("uname", "System information", "System Info"),
    ("uptime", "System uptime", "System Info"),
    ("users", "Logged in users", "System Info"),
    ("vmstat", "Virtual memory stats", "System Info"),
    ("w", "Who is logged in", "System Info"),
    ("watch", "Execute program periodically", "System Info"),
    ("who", "Who is logged in", "System Info"),
    ("whoami", "Current user", "System Info"),
    ("kill", "Send signals", "Process Management"),
    ("killall", "Kill by name", "Process Management"),
    ("killall5", "Kill all processes", "Process Management"),
    ("pgrep", "Find processes", "Process Management"),
    ("pidof", "Find PID by name", "Process Management"),
    ("pkill", "Kill by pattern", "Process Management"),
    ("pmap", "Process memory map", "Process Management"),
    ("prlimit", "Process resource limits", "Process Management"),
    ("ps", "Process status", "Process Management"),
    ("pwdx", "Process working dir", "Process Management"),
    ("renice", "Change priority", "Process Management"),
    ("setsid", "New session", "Process Management"),
    ("time", "Time a command", "Process Management"),
    ("cksum", "CRC checksum", "Checksums & Encoding"),
    ("crc32", "CRC32 checksum", "Checksums & Encoding"),
    ("hexdump", "Hex dump file", "Checksums & Encoding"),
    ("md5sum", "MD5 checksum", "Checksums & Encoding"),
    ("od", "Octal dump", "Checksums & Encoding"),
    ("sha1sum", "SHA1 checksum", "Checksums & Encoding"),
    ("sha224sum", "SHA224 checksum", "Checksums & Encoding"),
    ("sha256sum", "SHA256 checksum", "Checksums & Encoding"),
    ("sha384sum", "SHA384 checksum", "Checksums & Encoding"),
    ("sha3sum", "SHA3 checksum", "Checksums & Encoding"),
    ("sha512sum", "SHA512 checksum", "Checksums & Encoding"),
    ("uudecode", "Decode uuencoded file", "Checksums & Encoding"),
    ("uuencode", "Uuencode file", "Checksums & Encoding"),
    ("arp", "Manipulate ARP cache", "Networking"),
    ("arping", "Send ARP requests", "Networking"),
    ("brctl", "Ethernet bridge admin", "Networking"),
    ("ftpget", "Download via FTP", "Networking"),
    ("ftpput", "Upload via FTP", "Networking"),
    ("host", "DNS lookup utility", "Networking"),
    ("httpd", "HTTP server", "Networking"),
    ("ifconfig", "Configure interface", "Networking"),
    ("ifdown", "Bring down interface", "Networking"),
    ("ifup", "Bring up interface", "Networking"),
    ("ip", "Show/manipulate routing", "Networking"),
    ("ipaddr", "Protocol address mgmt", "Networking"),
    ("ipcalc", "IP address calculator", "Networking"),
    ("iplink", "Network device config", "Networking"),
    ("ipneigh", "Neighbour/ARP tables", "Networking"),
    ("iproute", "Routing table mgmt", "Networking"),
    ("iprule", "Routing policy database", "Networking"),
    ("nameif", "Name interfaces by MAC", "Networking"),
    ("nbd-client", "NBD client", "Networking"),
    ("nbd-server", "NBD server", "Networking"),
    ("nc", "Arbitrary TCP/UDP", "Networking"),
    ("netcat", "Alias for nc", "Networking"),
    ("netstat", "Network statistics", "Networking"),
    ("nslookup", "Query DNS servers", "Networking"),
    ("ping", "Send ICMP ECHO_REQUEST", "Networking"),
    ("ping6", "IPv6 ping", "Networking"),
    ("route", "Show/manipulate routing", "Networking"),
    ("slattach", "Attach serial line", "Networking"),
    ("sntp", "SNTP client", "Networking"),
    ("ss", "Socket statistics", "Networking"),
    ("telnet", "Telnet client", "Networking"),
    ("tftp", "TFTP client", "Networking"),
    ("traceroute", "Print route packets take", "Networking"),
    ("traceroute6", "IPv6 traceroute", "Networking"),
    ("tunctl", "Create/delete TUN/TAP", "Networking"),
    ("wget", "Network downloader", "Networking"),
    ("sh", "POSIX-compliant shell", "Shell"),
    ("ash", "Almquist shell (alias)", "Shell"),
    ("dash", "Debian Almquist shell", "Shell"),
    ("init", "System init (PID 1)", "Init System"),
    ("telinit", "Change runlevel", "Init System"),
    ("runlevel", "Print runlevel", "Init System"),
    ("getty", "Open terminal", "Init System"),
    ("sulogin", "Single-user login", "Init System"),
    ("linuxrc", "Init for initramfs", "Init System"),
    ("gpiodetect", "List GPIO chips", "Hardware"),
    ("gpiofind", "Find GPIO line", "Hardware"),
    ("gpioget", "Read GPIO values", "Hardware"),
    ("gpioinfo", "GPIO chip info", "Hardware"),
    ("gpioset", "Set GPIO values", "Hardware"),
    ("i2cdetect", "Detect I2C devices", "Hardware"),
    ("i2cdump", "Dump I2C registers", "Hardware"),
    ("i2cget", "Read I2C register", "Hardware"),
    ("i2cset", "Write I2C register", "Hardware"),
    ("i2ctransfer", "I2C transfer", "Hardware"),
    ("lspci", "List PCI devices", "Hardware"),
    ("lsusb", "List USB devices", "Hardware"),
    ("bunzip2", "Decompress bzip2", "Archiving"),
    ("bzcat", "Decompress bzip2 to stdout", "Archiving"),
    ("bzip2", "Bzip2 compression", "Archiving"),
    ("compress", "LZW compression", "Archiving"),
    ("cpio", "Copy files to/from archives", "Archiving"),
    ("gunzip", "Decompress gzip", "Archiving"),
    ("gzip", "GNU zip compression", "Archiving"),
    ("tar", "Tape archive utility", "Archiving"),
    ("uncompress", "LZW decompression", "Archiving"),
    ("unxz", "Decompress xz", "Archiving"),
    ("unzip", "Extract ZIP archives", "Archiving"),
    ("xz", "LZMA2 compression", "Archiving"),
    ("xzcat", "Decompress xz to stdout", "Archiving"),
    ("zcat", "Decompress gzip to stdout", "Archiving"),
    ("apk", "Alpine package manager", "Package Management"),
    ("[", "Test alias", "Misc"),
    ("ascii", "ASCII table", "Misc"),
    ("clear", "Clear screen", "Misc"),
    ("cmp", "Compare bytes", "Misc"),
    ("count", "Count input", "Misc"),
    ("diff", "Compare files", "Misc"),
    ("expr", "Evaluate expression", "Misc"),
    ("factor", "Prime factors", "Misc"),
    ("false", "Return failure", "Misc"),
    ("hd", "Hexdump alias", "Misc"),
    ("help", "Show help", "Misc"),
    ("hexedit", "Hex editor", "Misc"),
    ("inotifyd", "Inotify daemon", "Misc"),
    ("login", "User login", "Misc"),
    ("mcookie", "Generate magic cookie", "Misc"),
    ("memeater", "Memory stress test", "Misc"),
    ("mesg", "Control messages", "Misc"),
    ("microcom", "Serial terminal", "Misc"),
    ("mix", "Audio mixer", "Misc"),
    ("mkpasswd", "Generate password hash", "Misc"),
    ("mkswap", "Create swap area", "Misc"),
    ("nologin", "Deny login", "Misc"),
    ("nsenter", "Enter namespace", "Misc"),
    ("oneit", "Simple init", "Misc"),
    ("pwgen", "Generate passwords", "Misc"),
    ("readelf", "Display ELF info", "Misc"),
    ("reset", "Reset terminal", "Misc"),
    ("shuf", "Shuffle lines", "Misc"),
    ("sleep", "Delay execution", "Misc"),
    ("switch_root", "Switch root filesystem", "Misc"),
    ("test", "Evaluate expressions", "Misc"),
    ("toybox", "Toybox compatibility", "Misc"),
    ("true", "Return success", "Misc"),
    ("ts", "Timestamp input", "Misc"),
    ("uclampset", "Set utilization clamp", "Misc"),
    ("ulimit", "Resource limits", "Misc"),
    ("unicode", "Unicode utilities", "Misc"),
    ("unshare", "Run with unshared namespaces", "Misc"),
    ("usleep", "Microsecond sleep", "Misc"),
    ("uuidgen", "Generate UUID", "Misc"),
    ("watchdog", "Watchdog daemon", "Misc"),
    ("which", "Locate command", "Misc"),
    ("screen", "Terminal multiplexer", "Terminal Multiplexer"),
    ("tmux", "Terminal multiplexer (alias)", "Terminal Multiplexer"),
];
